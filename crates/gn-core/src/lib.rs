//! `gn-core` — foundational types for the `ghostnav` grid navigation engine.
//!
//! This crate is a dependency of every other `gn-*` crate.  It has no `gn-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`direction`]   | `Direction` (four cardinal moves, canonical order)    |
//! | [`ids`]         | `AgentId`, `TileId`                                   |
//! | [`grid`]        | `GridPos`, Manhattan distance                         |
//! | [`kind`]        | `AgentKind` enum (player + four ghost personalities)  |
//! | [`config`]      | `Tick`, `GameConfig`                                  |
//! | [`rng`]         | `AgentRng` (per-agent, seedable, `RngCore`)           |
//! | [`error`]       | `GnError`, `GnResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public data types.   |

pub mod config;
pub mod direction;
pub mod error;
pub mod grid;
pub mod ids;
pub mod kind;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{GameConfig, Tick};
pub use direction::Direction;
pub use error::{GnError, GnResult};
pub use grid::GridPos;
pub use ids::{AgentId, TileId};
pub use kind::AgentKind;
pub use rng::AgentRng;
