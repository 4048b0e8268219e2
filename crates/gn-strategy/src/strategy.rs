//! The `Strategy` trait — the per-kind decision extension point.

use gn_agent::AgentMemory;
use gn_core::{AgentId, Direction};

use crate::{NavContext, StrategyResult};

/// Pluggable per-agent decision logic.
///
/// A strategy looks at the read-only [`NavContext`] and the deciding agent's
/// own [`AgentMemory`] and returns the direction it wants to move this tick.
/// It never commits the move; the game loop does that through
/// [`AgentStore::occupy`][gn_agent::AgentStore::occupy].
///
/// # Return value
///
/// - `Ok(Some(dir))` — the agent wants to step in `dir`.
/// - `Ok(None)` — no legal move (trapped) or nothing to do.  Not an error.
/// - `Err(_)` — usage error, e.g. the agent was never placed.
///
/// # Thread safety
///
/// The game loop may decide for many agents in parallel, so implementations
/// must be `Send + Sync`.  Anything that varies per agent lives in
/// `AgentMemory`, not in the strategy.
///
/// # Example
///
/// ```rust
/// use gn_agent::AgentMemory;
/// use gn_core::{AgentId, Direction};
/// use gn_strategy::{NavContext, Strategy, StrategyResult};
///
/// /// Always heads north if it can.
/// struct NorthBound;
///
/// impl Strategy for NorthBound {
///     fn next_move(
///         &self,
///         agent:   AgentId,
///         ctx:     &NavContext<'_>,
///         _memory: &mut AgentMemory,
///     ) -> StrategyResult<Option<Direction>> {
///         let tile = ctx.current_tile(agent)?;
///         Ok(gn_strategy::select::accessible_step(ctx, tile, Direction::North, agent)
///             .map(|_| Direction::North))
///     }
/// }
/// ```
pub trait Strategy: Send + Sync + 'static {
    /// Decide the move for `agent` this tick.
    fn next_move(
        &self,
        agent:  AgentId,
        ctx:    &NavContext<'_>,
        memory: &mut AgentMemory,
    ) -> StrategyResult<Option<Direction>>;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    #[inline]
    fn next_move(
        &self,
        agent:  AgentId,
        ctx:    &NavContext<'_>,
        memory: &mut AgentMemory,
    ) -> StrategyResult<Option<Direction>> {
        (**self).next_move(agent, ctx, memory)
    }
}
