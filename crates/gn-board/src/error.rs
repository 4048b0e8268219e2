//! Board construction error type.

use thiserror::Error;

use gn_core::{GridPos, TileId};

/// Errors produced while building or parsing a board.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("two tiles share grid position {0}")]
    DuplicatePosition(GridPos),

    #[error("link from {from} references unknown tile {to}")]
    DanglingLink { from: TileId, to: TileId },

    #[error("tile {0} not found on board")]
    TileNotFound(TileId),

    #[error("unknown map character {ch:?} at row {row}, column {col}")]
    UnknownSymbol { row: usize, col: usize, ch: char },
}

pub type BoardResult<T> = Result<T, BoardError>;
