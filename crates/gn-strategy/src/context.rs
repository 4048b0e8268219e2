//! Read-only world view passed to every strategy callback.

use gn_agent::AgentStore;
use gn_board::{Board, TileGraph};
use gn_core::{AgentId, Direction, GnError, Tick, TileId};

use crate::{StrategyError, StrategyResult};

/// Occupant-dependent accessibility rules layered over terrain.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessRules {
    /// A ghost may not step onto a tile another ghost already holds.
    pub ghosts_block_ghosts: bool,
}

/// A read-only snapshot of the game state shared by all decisions of one
/// tick.
///
/// Implements [`TileGraph`]: adjacency comes from the board, and
/// accessibility combines the board's terrain admission for the agent's
/// kind with the occupant rules in [`rules`](Self::rules).
///
/// # Lifetimes
///
/// Borrows live for one decision phase.  The game loop never mutates the
/// board or the store while a `NavContext` exists.
#[derive(Copy, Clone)]
pub struct NavContext<'a> {
    /// Tick being decided.
    pub tick: Tick,

    pub board: &'a Board,

    /// Positions and kinds of every agent.
    pub agents: &'a AgentStore,

    /// Tile the ghosts are chasing this tick (normally the player's), if
    /// visible.
    pub target: Option<TileId>,

    pub rules: AccessRules,
}

impl<'a> NavContext<'a> {
    /// Context at tick zero with no target and default rules.
    pub fn new(board: &'a Board, agents: &'a AgentStore) -> Self {
        Self { tick: Tick::ZERO, board, agents, target: None, rules: AccessRules::default() }
    }

    pub fn at_tick(mut self, tick: Tick) -> Self {
        self.tick = tick;
        self
    }

    pub fn with_target(mut self, target: Option<TileId>) -> Self {
        self.target = target;
        self
    }

    pub fn with_rules(mut self, rules: AccessRules) -> Self {
        self.rules = rules;
        self
    }

    /// The tile `agent` stands on.
    ///
    /// # Errors
    ///
    /// `Core(AgentNotFound)` for an unknown agent, `Unplaced` for an agent
    /// that has never occupied a tile.
    pub fn current_tile(&self, agent: AgentId) -> StrategyResult<TileId> {
        if self.agents.kind(agent).is_none() {
            return Err(GnError::AgentNotFound(agent).into());
        }
        self.agents.current_tile(agent).ok_or(StrategyError::Unplaced(agent))
    }

    /// Manhattan distance between two tiles of the board.
    #[inline]
    pub fn distance(&self, a: TileId, b: TileId) -> Option<u32> {
        self.board.distance(a, b)
    }

    fn blocked_by_ghost(&self, tile: TileId, agent: AgentId) -> bool {
        self.agents
            .occupants(tile)
            .iter()
            .any(|&other| other != agent && self.agents.kind(other).is_some_and(|k| k.is_ghost()))
    }
}

impl TileGraph for NavContext<'_> {
    #[inline]
    fn neighbor(&self, tile: TileId, dir: Direction) -> Option<TileId> {
        self.board.neighbor(tile, dir)
    }

    fn is_accessible_to(&self, tile: TileId, agent: AgentId) -> bool {
        let Some(kind) = self.agents.kind(agent) else { return false };
        if !self.board.admits(tile, kind) {
            return false;
        }
        !(self.rules.ghosts_block_ghosts && kind.is_ghost() && self.blocked_by_ghost(tile, agent))
    }
}
