//! `gn-agent` — agent storage and the occupancy relation.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`store`]     | `AgentStore` — kinds, current tiles, per-tile occupant sets  |
//! | [`memory`]    | `AgentMemory` / `AgentMemories` — RNG and remembered target  |
//! | [`builder`]   | `AgentStoreBuilder` (fluent construction)                    |
//! | [`error`]     | `AgentError`, `AgentResult<T>`                               |
//!
//! # Occupancy invariant
//!
//! For every agent `a` and tile `t`:
//!
//! ```text
//! store.current_tile(a) == Some(t)  ⇔  store.occupants(t).contains(&a)
//! ```
//!
//! [`AgentStore::occupy`] and [`AgentStore::vacate`] are the only functions
//! that touch either side, so the two views cannot drift apart.

pub mod builder;
pub mod error;
pub mod memory;
pub mod store;


pub use builder::AgentStoreBuilder;
pub use error::{AgentError, AgentResult};
pub use memory::{AgentMemories, AgentMemory};
pub use store::AgentStore;
