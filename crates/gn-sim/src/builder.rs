//! Fluent builder for constructing a [`Game`].

use gn_agent::{AgentMemories, AgentStore};
use gn_board::Board;
use gn_core::{AgentId, GameConfig, TileId};
use gn_strategy::{AccessRules, Strategy};
use tracing::debug;

use crate::{Game, GameError, GameResult};

/// Fluent builder for [`Game<S>`].
///
/// # Required inputs
///
/// - [`GameConfig`] — seed, total ticks, snapshot interval
/// - [`Board`] — from [`gn_board::BoardBuilder`] or the ASCII loader
/// - [`AgentStore`] + [`AgentMemories`] — from [`gn_agent::AgentStoreBuilder`]
/// - `S: Strategy` — usually a [`Roster`][gn_strategy::Roster]
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                                     |
/// |--------------------------|---------------------------------------------|
/// | `.rules(r)`              | `AccessRules::default()`                    |
/// | `.initial_positions(v)`  | Unplaced agents go to the board's spawns    |
///
/// With no explicit positions, agents already placed in the store keep their
/// tile; the rest take the board's player or ghost spawn points in id order,
/// cycling when there are more agents than spawns.
pub struct GameBuilder<S: Strategy> {
    config:    GameConfig,
    board:     Board,
    agents:    AgentStore,
    memories:  AgentMemories,
    strategy:  S,
    rules:     AccessRules,
    positions: Option<Vec<TileId>>,
}

impl<S: Strategy> GameBuilder<S> {
    /// Create a builder with all required inputs.
    pub fn new(
        config:   GameConfig,
        board:    Board,
        agents:   AgentStore,
        memories: AgentMemories,
        strategy: S,
    ) -> Self {
        Self {
            config,
            board,
            agents,
            memories,
            strategy,
            rules:     AccessRules::default(),
            positions: None,
        }
    }

    pub fn rules(mut self, rules: AccessRules) -> Self {
        self.rules = rules;
        self
    }

    /// Starting tile for each agent (must be length `agent_count`).
    pub fn initial_positions(mut self, positions: Vec<TileId>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Validate inputs, place every agent, and return a ready-to-run
    /// [`Game`].
    ///
    /// # Errors
    ///
    /// - memories or positions of the wrong length
    /// - a store sized for a different board
    /// - no spawn point for an unplaced agent's kind
    /// - a starting tile the agent's kind may not stand on
    pub fn build(self) -> GameResult<Game<S>> {
        let agent_count = self.agents.count;

        // ── Validate sizes ────────────────────────────────────────────────
        if self.memories.len() != agent_count {
            return Err(GameError::AgentCountMismatch {
                expected: agent_count,
                got:      self.memories.len(),
                what:     "agent memories",
            });
        }
        if self.agents.tile_count() != self.board.tile_count() {
            return Err(GameError::Config(format!(
                "agent store covers {} tiles but the board has {}",
                self.agents.tile_count(),
                self.board.tile_count(),
            )));
        }

        // ── Place agents ──────────────────────────────────────────────────
        let mut agents = self.agents;
        match self.positions {
            Some(p) => {
                if p.len() != agent_count {
                    return Err(GameError::AgentCountMismatch {
                        expected: agent_count,
                        got:      p.len(),
                        what:     "initial positions",
                    });
                }
                for (i, &tile) in p.iter().enumerate() {
                    agents.occupy(AgentId(i as u32), tile)?;
                }
            }
            None => place_at_spawns(&self.board, &mut agents)?,
        }

        // ── Check starting tiles ──────────────────────────────────────────
        for agent in agents.agent_ids() {
            let tile = agents.require_tile(agent)?;
            let admitted = agents.kind(agent).is_some_and(|k| self.board.admits(tile, k));
            if !admitted {
                return Err(GameError::InaccessibleStart { agent, tile });
            }
        }

        debug!(
            agents = agent_count,
            tiles = self.board.tile_count(),
            seed = self.config.seed,
            "game built"
        );

        Ok(Game::from_parts(
            self.config,
            self.board,
            agents,
            self.memories,
            self.strategy,
            self.rules,
        ))
    }
}

/// Put every unplaced agent on a spawn point of its kind.
fn place_at_spawns(board: &Board, agents: &mut AgentStore) -> GameResult<()> {
    let mut players = 0usize;
    let mut ghosts = 0usize;
    let unplaced: Vec<AgentId> = agents
        .agent_ids()
        .filter(|&a| agents.current_tile(a).is_none())
        .collect();

    for agent in unplaced {
        let Some(kind) = agents.kind(agent) else { continue };
        let (starts, used) = if kind.is_player() {
            (board.player_starts(), &mut players)
        } else {
            (board.ghost_starts(), &mut ghosts)
        };
        if starts.is_empty() {
            return Err(GameError::NoSpawn(kind));
        }
        let tile = starts[*used % starts.len()];
        *used += 1;
        agents.occupy(agent, tile)?;
    }
    Ok(())
}
