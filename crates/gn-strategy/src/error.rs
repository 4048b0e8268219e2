use gn_core::{AgentId, GnError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StrategyError {
    /// A decision was requested for an agent that was never placed.
    #[error("agent {0} has no current tile; place it with `occupy` first")]
    Unplaced(AgentId),

    #[error(transparent)]
    Core(#[from] GnError),
}

pub type StrategyResult<T> = Result<T, StrategyError>;
