//! Game observer trait and the per-tick records it receives.

use gn_agent::AgentStore;
use gn_board::Board;
use gn_core::{AgentId, Tick, TileId};

/// A ghost and the player ending a tick on the same tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Encounter {
    pub tick:   Tick,
    pub tile:   TileId,
    pub ghost:  AgentId,
    pub player: AgentId,
}

/// What happened during one tick.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Agents that changed tile.
    pub moved: usize,

    /// Agents whose strategy returned no move.
    pub idle: usize,

    /// Moves rejected at commit because the target tile was no longer
    /// accessible (e.g. another ghost got there first).
    pub blocked: usize,

    /// Encounters at the end of the tick, ascending by player then ghost id.
    pub encounters: Vec<Encounter>,
}

/// Callbacks invoked by [`Game::run`][crate::Game::run] and friends at key
/// points in the tick loop.
///
/// All methods default to no-ops.
///
/// # Example — encounter counter
///
/// ```rust
/// use gn_sim::{Encounter, GameObserver};
///
/// #[derive(Default)]
/// struct Caught(usize);
///
/// impl GameObserver for Caught {
///     fn on_encounter(&mut self, _e: &Encounter) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait GameObserver {
    /// Called at the very start of each tick, before any decision.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per encounter, after all moves of the tick are committed.
    fn on_encounter(&mut self, _encounter: &Encounter) {}

    /// Called at the end of each tick.
    fn on_tick_end(&mut self, _tick: Tick, _report: &TickReport) {}

    /// Called every `config.snapshot_interval_ticks` ticks with read-only
    /// access to the board and every agent's position.
    fn on_snapshot(&mut self, _tick: Tick, _board: &Board, _agents: &AgentStore) {}

    /// Called once when [`Game::run`][crate::Game::run] finishes.
    fn on_game_end(&mut self, _final_tick: Tick) {}
}

/// A [`GameObserver`] that does nothing.
pub struct NoopObserver;

impl GameObserver for NoopObserver {}
