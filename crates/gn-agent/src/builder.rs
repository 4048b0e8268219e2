//! Fluent builder for constructing `AgentStore` + `AgentMemories` in one step.
//!
//! # Usage
//!
//! ```rust
//! use gn_agent::AgentStoreBuilder;
//! use gn_core::AgentKind;
//!
//! let (store, memories) = AgentStoreBuilder::new(/*tile_count=*/ 64, /*seed=*/ 42)
//!     .with_agent(AgentKind::Player)
//!     .with_agents(AgentKind::GHOSTS)
//!     .build();
//!
//! assert_eq!(store.count, 5);
//! assert_eq!(memories.len(), 5);
//! ```
//!
//! Agents start unplaced; bind each to a starting tile with
//! [`AgentStore::occupy`][crate::AgentStore::occupy].

use gn_core::{AgentId, AgentKind};

use crate::{AgentMemories, AgentStore};

/// Fluent builder for [`AgentStore`] + [`AgentMemories`].
pub struct AgentStoreBuilder {
    tile_count: usize,
    seed:       u64,
    kinds:      Vec<AgentKind>,
}

impl AgentStoreBuilder {
    /// Create a builder for a board of `tile_count` tiles, using `seed` as the
    /// global RNG seed.
    pub fn new(tile_count: usize, seed: u64) -> Self {
        Self { tile_count, seed, kinds: Vec::new() }
    }

    /// Append one agent.  Ids are assigned in call order from 0.
    pub fn with_agent(mut self, kind: AgentKind) -> Self {
        self.kinds.push(kind);
        self
    }

    pub fn with_agents(mut self, kinds: impl IntoIterator<Item = AgentKind>) -> Self {
        self.kinds.extend(kinds);
        self
    }

    /// Append one agent and return the id it will get.
    pub fn add(&mut self, kind: AgentKind) -> AgentId {
        let id = AgentId(self.kinds.len() as u32);
        self.kinds.push(kind);
        id
    }

    /// Construct `AgentStore` and `AgentMemories`.
    pub fn build(self) -> (AgentStore, AgentMemories) {
        let memories = AgentMemories::new(self.kinds.len(), self.seed);
        let store = AgentStore::new(self.kinds, self.tile_count);
        (store, memories)
    }
}
