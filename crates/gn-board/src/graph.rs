//! The tile graph query surface.
//!
//! # Pluggability
//!
//! Decision code only ever talks to a [`TileGraph`], so tests can hand it a
//! tiny stub graph and applications can layer their own accessibility rules
//! over a [`Board`][crate::Board] without touching the strategies.

use gn_core::{AgentId, Direction, TileId};

/// Read-only adjacency plus a per-agent accessibility predicate.
///
/// Both methods must be free of side effects.  The engine never checks that
/// they agree with each other (e.g. that `neighbor` is symmetric under
/// [`Direction::opposite`]); consistency is the implementor's job.
pub trait TileGraph {
    /// The tile one step from `tile` in `dir`, or `None` at the board edge
    /// or for a structurally disconnected side.
    fn neighbor(&self, tile: TileId, dir: Direction) -> Option<TileId>;

    /// Whether `agent` may move onto `tile` right now.  May depend on who
    /// currently occupies `tile`.
    fn is_accessible_to(&self, tile: TileId, agent: AgentId) -> bool;
}

impl<G: TileGraph + ?Sized> TileGraph for &G {
    #[inline]
    fn neighbor(&self, tile: TileId, dir: Direction) -> Option<TileId> {
        (**self).neighbor(tile, dir)
    }

    #[inline]
    fn is_accessible_to(&self, tile: TileId, agent: AgentId) -> bool {
        (**self).is_accessible_to(tile, agent)
    }
}
