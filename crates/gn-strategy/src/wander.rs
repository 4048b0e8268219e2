//! The default personality: pure random fallback.

use gn_agent::AgentMemory;
use gn_core::{AgentId, Direction};

use crate::select::fallback;
use crate::{NavContext, Strategy, StrategyResult};

/// Picks a uniformly random accessible direction every tick.
pub struct Wanderer;

impl Strategy for Wanderer {
    fn next_move(
        &self,
        agent:  AgentId,
        ctx:    &NavContext<'_>,
        memory: &mut AgentMemory,
    ) -> StrategyResult<Option<Direction>> {
        let tile = ctx.current_tile(agent)?;
        Ok(fallback(ctx, tile, agent, &mut memory.rng))
    }
}
