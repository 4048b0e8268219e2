//! Per-agent mutable decision state.

use gn_core::{AgentId, AgentRng, TileId};

/// State a strategy may read and update while deciding for one agent.
///
/// Nothing else about the world is mutable during a decision.
#[derive(Debug)]
pub struct AgentMemory {
    /// The agent's own random source.
    pub rng: AgentRng,

    /// Last target tile the agent saw.  Strategies fall back to it when the
    /// target is not visible this tick.
    pub last_target: Option<TileId>,
}

impl AgentMemory {
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        Self { rng: AgentRng::new(global_seed, agent), last_target: None }
    }

    /// Record `seen` if present and return the best known target.
    #[inline]
    pub fn remember_target(&mut self, seen: Option<TileId>) -> Option<TileId> {
        if seen.is_some() {
            self.last_target = seen;
        }
        self.last_target
    }
}

/// One [`AgentMemory`] per agent, indexed by `AgentId`.
///
/// Kept apart from [`AgentStore`][crate::AgentStore] so decisions can hold
/// `&AgentStore` and `&mut AgentMemory` simultaneously.
pub struct AgentMemories {
    pub inner: Vec<AgentMemory>,
}

impl AgentMemories {
    /// Allocate and seed `count` memories from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentMemory::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's memory.
    ///
    /// # Panics
    ///
    /// Panics if `agent` is out of range.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentMemory {
        &mut self.inner[agent.index()]
    }

    pub fn get(&self, agent: AgentId) -> Option<&AgentMemory> {
        self.inner.get(agent.index())
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
