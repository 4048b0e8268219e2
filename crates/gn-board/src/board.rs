//! Board representation.
//!
//! # Data layout
//!
//! Tiles are an arena indexed by `TileId`.  Every per-tile attribute is its
//! own `Vec` (position, terrain, neighbour table), so a decision touching
//! four neighbours reads four entries of one contiguous `links` array.
//!
//! ```text
//! links[tile.index()][dir.ordinal()] == Some(neighbour) | None
//! ```
//!
//! A `HashMap<GridPos, TileId>` lets callers look tiles up by coordinate.

use std::collections::HashMap;

use gn_core::{AgentKind, Direction, GridPos, TileId};

use crate::Terrain;

/// An immutable tile graph with terrain.
///
/// Do not construct directly; use [`BoardBuilder`][crate::BoardBuilder] or
/// the ASCII loader.
#[derive(Debug, Clone)]
pub struct Board {
    /// Grid position of each tile.  Indexed by `TileId`.
    tile_pos: Vec<GridPos>,

    /// Terrain of each tile.  Indexed by `TileId`.
    terrain: Vec<Terrain>,

    /// Tiles marked as player spawn points, in insertion order.
    player_starts: Vec<TileId>,

    /// Tiles marked as ghost spawn points, in insertion order.
    ghost_starts: Vec<TileId>,

    links:  Vec<[Option<TileId>; 4]>,
    by_pos: HashMap<GridPos, TileId>,
}

impl Board {
    pub(crate) fn from_parts(
        tile_pos:      Vec<GridPos>,
        terrain:       Vec<Terrain>,
        links:         Vec<[Option<TileId>; 4]>,
        player_starts: Vec<TileId>,
        ghost_starts:  Vec<TileId>,
    ) -> Self {
        let by_pos = tile_pos
            .iter()
            .enumerate()
            .map(|(i, &p)| (p, TileId(i as u32)))
            .collect();
        Self { tile_pos, terrain, player_starts, ghost_starts, links, by_pos }
    }

    // ── Spawns ────────────────────────────────────────────────────────────

    /// Tiles marked as player spawn points, in insertion order.
    pub fn player_starts(&self) -> &[TileId] {
        &self.player_starts
    }

    /// Tiles marked as ghost spawn points, in insertion order.
    pub fn ghost_starts(&self) -> &[TileId] {
        &self.ghost_starts
    }

    /// Every tile's grid position, indexed by `TileId`.
    pub fn positions(&self) -> &[GridPos] {
        &self.tile_pos
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn tile_count(&self) -> usize {
        self.tile_pos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tile_pos.is_empty()
    }

    /// `true` if `tile` indexes into this board.
    #[inline]
    pub fn contains(&self, tile: TileId) -> bool {
        tile.index() < self.tile_pos.len()
    }

    /// Iterator over every `TileId` in ascending order.
    pub fn tiles(&self) -> impl Iterator<Item = TileId> + '_ {
        (0..self.tile_pos.len() as u32).map(TileId)
    }

    // ── Per-tile queries ──────────────────────────────────────────────────

    /// Adjacent tile in `dir`.  Unknown tiles have no neighbours.
    #[inline]
    pub fn neighbor(&self, tile: TileId, dir: Direction) -> Option<TileId> {
        self.links.get(tile.index()).and_then(|l| l[dir.ordinal()])
    }

    /// All four neighbour slots of `tile`, in canonical direction order.
    pub fn neighbors(&self, tile: TileId) -> impl Iterator<Item = (Direction, Option<TileId>)> + '_ {
        Direction::ALL.into_iter().map(move |d| (d, self.neighbor(tile, d)))
    }

    #[inline]
    pub fn terrain_of(&self, tile: TileId) -> Option<Terrain> {
        self.terrain.get(tile.index()).copied()
    }

    #[inline]
    pub fn pos_of(&self, tile: TileId) -> Option<GridPos> {
        self.tile_pos.get(tile.index()).copied()
    }

    /// The tile at grid position `pos`, if any.
    pub fn tile_at(&self, pos: GridPos) -> Option<TileId> {
        self.by_pos.get(&pos).copied()
    }

    /// Static terrain admission for `kind`.  Unknown tiles admit nobody.
    #[inline]
    pub fn admits(&self, tile: TileId, kind: AgentKind) -> bool {
        self.terrain_of(tile).is_some_and(|t| t.admits(kind))
    }

    /// Manhattan distance between two tiles, or `None` if either is unknown.
    pub fn distance(&self, a: TileId, b: TileId) -> Option<u32> {
        Some(self.pos_of(a)?.manhattan(self.pos_of(b)?))
    }

    // ── Diagnostics ───────────────────────────────────────────────────────

    /// Every `(tile, dir)` whose neighbour does not link back via
    /// `dir.opposite()`.
    ///
    /// A regular grid board returns an empty list.  One-way links added with
    /// [`BoardBuilder::link`][crate::BoardBuilder::link] show up here; that
    /// is allowed, this is only a report.
    pub fn asymmetric_links(&self) -> Vec<(TileId, Direction)> {
        let mut out = Vec::new();
        for tile in self.tiles() {
            for (dir, next) in self.neighbors(tile) {
                let Some(next) = next else { continue };
                if self.neighbor(next, dir.opposite()) != Some(tile) {
                    out.push((tile, dir));
                }
            }
        }
        out
    }
}
