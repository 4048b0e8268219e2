//! A strategy that never moves.

use gn_agent::AgentMemory;
use gn_core::{AgentId, Direction};

use crate::{NavContext, Strategy, StrategyResult};

/// A [`Strategy`] that always stays put.
///
/// The default for the player (whose moves come from input) and a handy
/// placeholder in tests.  Still rejects unplaced agents.
pub struct Idle;

impl Strategy for Idle {
    fn next_move(
        &self,
        agent:   AgentId,
        ctx:     &NavContext<'_>,
        _memory: &mut AgentMemory,
    ) -> StrategyResult<Option<Direction>> {
        ctx.current_tile(agent)?;
        Ok(None)
    }
}
