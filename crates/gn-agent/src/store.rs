//! The agent arena and its occupancy relation.
//!
//! # Why two structs?
//!
//! The decision phase needs `&mut AgentMemories` (each agent's own RNG and
//! target memory) and `&AgentStore` (everyone's position, read-only) at the
//! same time.  Keeping memories outside the store lets both borrows coexist,
//! and lets the `parallel` feature of `gn-sim` hand out one `&mut
//! AgentMemory` per Rayon task.

use gn_core::{AgentId, AgentKind, GnError, TileId};
use tracing::trace;

use crate::{AgentError, AgentResult};

/// Kinds, positions, and tile occupant sets for every agent.
///
/// Per-agent fields are indexed by `AgentId`; occupant sets are indexed by
/// `TileId` and sized to the board the store was built for.
pub struct AgentStore {
    /// Number of agents.
    pub count: usize,

    kind:      Vec<AgentKind>,
    tile:      Vec<Option<TileId>>,
    occupants: Vec<Vec<AgentId>>,
}

impl AgentStore {
    pub(crate) fn new(kinds: Vec<AgentKind>, tile_count: usize) -> Self {
        let count = kinds.len();
        Self {
            count,
            kind:      kinds,
            tile:      vec![None; count],
            occupants: vec![Vec::new(); tile_count],
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of tiles the occupant table covers.
    #[inline]
    pub fn tile_count(&self) -> usize {
        self.occupants.len()
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// Agents of `kind`, in ascending id order.
    pub fn agents_of_kind(&self, kind: AgentKind) -> impl Iterator<Item = AgentId> + '_ {
        self.agent_ids().filter(move |&a| self.kind[a.index()] == kind)
    }

    #[inline]
    pub fn kind(&self, agent: AgentId) -> Option<AgentKind> {
        self.kind.get(agent.index()).copied()
    }

    // ── Occupancy queries ─────────────────────────────────────────────────

    /// The tile `agent` currently holds; `None` until the first `occupy`.
    #[inline]
    pub fn current_tile(&self, agent: AgentId) -> Option<TileId> {
        self.tile.get(agent.index()).copied().flatten()
    }

    /// Like [`current_tile`](Self::current_tile) but an unplaced agent is an
    /// error.
    pub fn require_tile(&self, agent: AgentId) -> AgentResult<TileId> {
        self.current_tile(agent).ok_or(AgentError::Unplaced(agent))
    }

    /// Agents standing on `tile`, in arrival order.  Unknown tiles are empty.
    #[inline]
    pub fn occupants(&self, tile: TileId) -> &[AgentId] {
        self.occupants.get(tile.index()).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `true` if any agent of a kind matching `pred` stands on `tile`.
    pub fn tile_has(&self, tile: TileId, pred: impl Fn(AgentKind) -> bool) -> bool {
        self.occupants(tile).iter().any(|&a| pred(self.kind[a.index()]))
    }

    // ── The occupancy mutators ────────────────────────────────────────────

    /// Move `agent` onto `tile`.
    ///
    /// Removes the agent from its previous tile's occupant set (if placed),
    /// adds it to `tile`'s set, and records `tile` as its current tile.  A
    /// no-op if the agent already occupies `tile`.
    ///
    /// # Errors
    ///
    /// Unknown agents and out-of-range tiles are rejected before any state
    /// changes.
    pub fn occupy(&mut self, agent: AgentId, tile: TileId) -> AgentResult<()> {
        self.check_agent(agent)?;
        if tile.index() >= self.occupants.len() {
            return Err(AgentError::TileOutOfRange { tile, tile_count: self.occupants.len() });
        }

        let previous = self.tile[agent.index()];
        if previous == Some(tile) {
            return Ok(());
        }
        if let Some(old) = previous {
            self.occupants[old.index()].retain(|&a| a != agent);
        }
        self.occupants[tile.index()].push(agent);
        self.tile[agent.index()] = Some(tile);

        trace!(%agent, from = ?previous, to = %tile, "occupy");
        Ok(())
    }

    /// Take `agent` off the board.  Returns the tile it left, if any.
    pub fn vacate(&mut self, agent: AgentId) -> AgentResult<Option<TileId>> {
        self.check_agent(agent)?;
        let previous = self.tile[agent.index()].take();
        if let Some(old) = previous {
            self.occupants[old.index()].retain(|&a| a != agent);
            trace!(%agent, from = %old, "vacate");
        }
        Ok(previous)
    }

    fn check_agent(&self, agent: AgentId) -> AgentResult<()> {
        if agent.index() < self.count {
            Ok(())
        } else {
            Err(GnError::AgentNotFound(agent).into())
        }
    }
}
