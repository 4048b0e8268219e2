//! Engine-wide error type.
//!
//! Sub-crates define their own error enums and wrap `GnError` as one variant
//! via `#[from]`, so `?` works across layer boundaries.

use thiserror::Error;

use crate::AgentId;

/// The base error type for `gn-core` and a common variant for sub-crates.
#[derive(Debug, Error)]
pub enum GnError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),
}

/// Shorthand result type for all `gn-*` crates.
pub type GnResult<T> = Result<T, GnError>;
