use gn_core::{AgentId, GnError, TileId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error(transparent)]
    Core(#[from] GnError),

    #[error("tile {tile} is outside the board ({tile_count} tiles)")]
    TileOutOfRange { tile: TileId, tile_count: usize },

    #[error("agent {0} has not been placed on a tile")]
    Unplaced(AgentId),
}

pub type AgentResult<T> = Result<T, AgentError>;
