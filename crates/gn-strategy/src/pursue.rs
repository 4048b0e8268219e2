//! Greedy chaser.

use gn_agent::AgentMemory;
use gn_core::{AgentId, Direction};
use tracing::trace;

use crate::select::{fallback, step_toward};
use crate::{NavContext, Strategy, StrategyResult};

/// Steps toward the target whenever a neighbour is strictly closer to it;
/// otherwise moves randomly.  Uses the last seen target when the current one
/// is hidden.
pub struct Pursuer;

impl Strategy for Pursuer {
    fn next_move(
        &self,
        agent:  AgentId,
        ctx:    &NavContext<'_>,
        memory: &mut AgentMemory,
    ) -> StrategyResult<Option<Direction>> {
        let tile = ctx.current_tile(agent)?;
        if let Some(target) = memory.remember_target(ctx.target) {
            if let Some(dir) = step_toward(ctx, tile, target, agent, |a, b| ctx.distance(a, b)) {
                trace!(%agent, %tile, %target, %dir, "chase");
                return Ok(Some(dir));
            }
        }
        Ok(fallback(ctx, tile, agent, &mut memory.rng))
    }
}
