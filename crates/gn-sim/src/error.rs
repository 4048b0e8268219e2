use gn_agent::AgentError;
use gn_core::{AgentId, AgentKind, GnError, TileId};
use gn_strategy::StrategyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("game configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("board has no spawn point for {0}")]
    NoSpawn(AgentKind),

    #[error("agent {agent} cannot start on tile {tile}")]
    InaccessibleStart { agent: AgentId, tile: TileId },

    #[error(transparent)]
    Core(#[from] GnError),

    #[error(transparent)]
    Agent(#[from] AgentError),

    #[error(transparent)]
    Strategy(#[from] StrategyError),
}

pub type GameResult<T> = Result<T, GameError>;
