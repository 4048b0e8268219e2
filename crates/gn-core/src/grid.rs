//! Integer grid coordinates and the grid distance metric.
//!
//! Strategies compare tiles by grid distance only; they never search paths.
//! Manhattan distance is the metric used for every threshold and
//! "move closer" decision in the engine.

use crate::Direction;

/// A column/row position on the board.  Row 0 is the top row.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// `|dx| + |dy|`, saturating at `u32::MAX`.
    #[inline]
    pub fn manhattan(self, other: GridPos) -> u32 {
        self.x.abs_diff(other.x).saturating_add(self.y.abs_diff(other.y))
    }

    /// The position one step away in `dir`, or `None` past the edge of the
    /// `i32` coordinate space.  No board bounds are checked.
    #[inline]
    pub fn step(self, dir: Direction) -> Option<GridPos> {
        let (dx, dy) = dir.delta();
        Some(GridPos { x: self.x.checked_add(dx)?, y: self.y.checked_add(dy)? })
    }
}

impl std::fmt::Display for GridPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
