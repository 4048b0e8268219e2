//! Incremental board construction.

use std::collections::HashMap;

use gn_core::{Direction, GridPos, TileId};

use crate::{Board, BoardError, BoardResult, Terrain};

/// Construct a [`Board`] incrementally, then call [`build`](Self::build).
///
/// Two linking styles can be mixed:
///
/// - **Explicit** — [`link`](Self::link) / [`link_both`](Self::link_both)
///   set a single neighbour slot.  Useful for irregular graphs and stub
///   boards in tests.
/// - **Grid** — [`connect_grid`](Self::connect_grid) makes `build()` link
///   every tile to the tile one step away in each direction.  With `wrap`,
///   a step off the bounding box re-enters on the far side (tunnels).
///
/// Explicit links always win over grid links for the same slot.
///
/// # Example
///
/// ```
/// use gn_board::{BoardBuilder, Terrain};
/// use gn_core::{Direction, GridPos};
///
/// let mut b = BoardBuilder::new();
/// let a = b.add_tile(GridPos::new(0, 1), Terrain::Floor);
/// let c = b.add_tile(GridPos::new(0, 0), Terrain::Floor);
/// b.link_both(a, Direction::North, c);
/// let board = b.build().unwrap();
/// assert_eq!(board.neighbor(a, Direction::North), Some(c));
/// assert_eq!(board.neighbor(c, Direction::South), Some(a));
/// ```
#[derive(Default)]
pub struct BoardBuilder {
    tiles:         Vec<(GridPos, Terrain)>,
    links:         Vec<(TileId, Direction, TileId)>,
    grid:          Option<bool>,
    player_starts: Vec<TileId>,
    ghost_starts:  Vec<TileId>,
}

impl BoardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tile and return its `TileId` (sequential from 0).
    pub fn add_tile(&mut self, pos: GridPos, terrain: Terrain) -> TileId {
        let id = TileId(self.tiles.len() as u32);
        self.tiles.push((pos, terrain));
        id
    }

    /// Set `from`'s neighbour in `dir` to `to`.  One-way.
    pub fn link(&mut self, from: TileId, dir: Direction, to: TileId) {
        self.links.push((from, dir, to));
    }

    /// Link `a → b` in `dir` and `b → a` in `dir.opposite()`.
    pub fn link_both(&mut self, a: TileId, dir: Direction, b: TileId) {
        self.link(a, dir, b);
        self.link(b, dir.opposite(), a);
    }

    /// Link orthogonally adjacent tiles automatically at build time.
    pub fn connect_grid(&mut self, wrap: bool) -> &mut Self {
        self.grid = Some(wrap);
        self
    }

    pub fn mark_player_start(&mut self, tile: TileId) {
        self.player_starts.push(tile);
    }

    pub fn mark_ghost_start(&mut self, tile: TileId) {
        self.ghost_starts.push(tile);
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Consume the builder and produce a [`Board`].
    ///
    /// # Errors
    ///
    /// - [`BoardError::DuplicatePosition`] if two tiles share a position.
    /// - [`BoardError::DanglingLink`] if a link names a tile never added.
    /// - [`BoardError::TileNotFound`] if a spawn mark names an unknown tile.
    pub fn build(self) -> BoardResult<Board> {
        let count = self.tiles.len();

        let mut by_pos: HashMap<GridPos, TileId> = HashMap::with_capacity(count);
        for (i, &(pos, _)) in self.tiles.iter().enumerate() {
            if by_pos.insert(pos, TileId(i as u32)).is_some() {
                return Err(BoardError::DuplicatePosition(pos));
            }
        }

        let mut links: Vec<[Option<TileId>; 4]> = vec![[None; 4]; count];

        if let Some(wrap) = self.grid {
            let bounds = Bounds::of(self.tiles.iter().map(|&(p, _)| p));
            for (i, &(pos, _)) in self.tiles.iter().enumerate() {
                for dir in Direction::ALL {
                    let next = match pos.step(dir) {
                        Some(next) if bounds.contains(next) => Some(next),
                        _ if wrap => Some(bounds.wrap(pos, dir)),
                        _ => None,
                    };
                    links[i][dir.ordinal()] = next.and_then(|p| by_pos.get(&p).copied());
                }
            }
        }

        for (from, dir, to) in self.links {
            if to.index() >= count {
                return Err(BoardError::DanglingLink { from, to });
            }
            let slot = links
                .get_mut(from.index())
                .ok_or(BoardError::TileNotFound(from))?;
            slot[dir.ordinal()] = Some(to);
        }

        for &tile in self.player_starts.iter().chain(&self.ghost_starts) {
            if tile.index() >= count {
                return Err(BoardError::TileNotFound(tile));
            }
        }

        let (tile_pos, terrain) = self.tiles.into_iter().unzip();
        Ok(Board::from_parts(tile_pos, terrain, links, self.player_starts, self.ghost_starts))
    }
}

// ── Bounding box for wrap-around ──────────────────────────────────────────────

struct Bounds {
    min: GridPos,
    max: GridPos,
}

impl Bounds {
    fn of(points: impl Iterator<Item = GridPos>) -> Self {
        let mut min = GridPos::new(i32::MAX, i32::MAX);
        let mut max = GridPos::new(i32::MIN, i32::MIN);
        for p in points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Self { min, max }
    }

    fn contains(&self, p: GridPos) -> bool {
        (self.min.x..=self.max.x).contains(&p.x) && (self.min.y..=self.max.y).contains(&p.y)
    }

    /// Step from `p` in `dir`, re-entering on the far side of the box.
    fn wrap(&self, p: GridPos, dir: Direction) -> GridPos {
        let (dx, dy) = dir.delta();
        GridPos::new(
            wrap_axis(p.x, dx, self.min.x, self.max.x),
            wrap_axis(p.y, dy, self.min.y, self.max.y),
        )
    }
}

/// `v + d` folded into `min..=max`.  Computed in `i64` so a box spanning
/// the whole `i32` range cannot overflow.
fn wrap_axis(v: i32, d: i32, min: i32, max: i32) -> i32 {
    let span = i64::from(max) - i64::from(min) + 1;
    let offset = (i64::from(v) + i64::from(d) - i64::from(min)).rem_euclid(span);
    // offset < span, so the result lies in min..=max.
    (i64::from(min) + offset) as i32
}
