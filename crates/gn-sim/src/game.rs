//! The `Game` struct and its tick loop.

use gn_agent::{AgentMemories, AgentStore};
use gn_board::Board;
use gn_core::{AgentId, AgentKind, Direction, GameConfig, GnError, Tick, TileId};
use gn_strategy::select::accessible_step;
use gn_strategy::{AccessRules, NavContext, Strategy, StrategyResult};
use tracing::{debug, trace, warn};

use crate::{Encounter, GameObserver, GameResult, TickReport};

// ── Game ──────────────────────────────────────────────────────────────────────

/// The main game runner.
///
/// `Game<S>` owns the board, the agents and their memories, and drives the
/// three-phase tick loop:
///
/// 1. **Decision phase** (optionally parallel with the `parallel` feature):
///    every agent gets one decision, either its queued [`steer`](Self::steer)
///    direction or [`Strategy::next_move`] against a shared read-only
///    [`NavContext`].
/// 2. **Commit phase** (sequential, ascending `AgentId`): each chosen move is
///    re-checked against the current occupancy and applied with
///    [`AgentStore::occupy`].  A move that became inaccessible because an
///    earlier agent moved is dropped.
/// 3. **Encounters**: every ghost sharing a tile with a player is reported.
///
/// Create via [`GameBuilder`][crate::GameBuilder].
pub struct Game<S: Strategy> {
    /// Run configuration (seed, total ticks, snapshot interval).
    pub config: GameConfig,

    /// The next tick to be played.
    pub tick: Tick,

    pub board: Board,

    /// Kinds and positions.  Strategies read this through `NavContext`.
    pub agents: AgentStore,

    /// Per-agent RNGs and target memory, kept apart for the split borrow.
    pub memories: AgentMemories,

    /// Decides for every agent.  Usually a [`Roster`][gn_strategy::Roster].
    pub strategy: S,

    pub rules: AccessRules,

    steering: Vec<Option<Direction>>,
}

impl<S: Strategy> Game<S> {
    pub(crate) fn from_parts(
        config:   GameConfig,
        board:    Board,
        agents:   AgentStore,
        memories: AgentMemories,
        strategy: S,
        rules:    AccessRules,
    ) -> Self {
        let steering = vec![None; agents.count];
        Self { config, tick: Tick::ZERO, board, agents, memories, strategy, rules, steering }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Play from the current tick to `config.end_tick()`.
    ///
    /// Use [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: GameObserver>(&mut self, observer: &mut O) -> GameResult<()> {
        while self.tick < self.config.end_tick() {
            self.step(observer)?;
        }
        observer.on_game_end(self.tick);
        Ok(())
    }

    /// Play exactly `n` ticks from the current position (ignores `end_tick`).
    pub fn run_ticks<O: GameObserver>(&mut self, n: u64, observer: &mut O) -> GameResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Play one tick and return what happened.
    ///
    /// On error no agent has moved, the tick does not advance and queued
    /// steering is kept.  Strategies may already have drawn from their RNGs.
    pub fn step<O: GameObserver>(&mut self, observer: &mut O) -> GameResult<TickReport> {
        let now = self.tick;
        observer.on_tick_start(now);
        let report = self.process_tick(now)?;
        for encounter in &report.encounters {
            observer.on_encounter(encounter);
        }
        observer.on_tick_end(now, &report);
        if self.config.is_snapshot_tick(now) {
            observer.on_snapshot(now, &self.board, &self.agents);
        }
        self.tick = now.next();
        Ok(report)
    }

    /// Queue `dir` as `agent`'s move for the next tick, bypassing its
    /// strategy.  This is how player input enters the game.  A later call
    /// before the tick replaces the earlier one.
    pub fn steer(&mut self, agent: AgentId, dir: Direction) -> GameResult<()> {
        let slot = self
            .steering
            .get_mut(agent.index())
            .ok_or(GnError::AgentNotFound(agent))?;
        *slot = Some(dir);
        Ok(())
    }

    /// The tile ghosts chase: the first placed player's tile.
    pub fn target(&self) -> Option<TileId> {
        self.agents
            .agents_of_kind(AgentKind::Player)
            .find_map(|p| self.agents.current_tile(p))
    }

    /// Every ghost standing on a player's tile right now.
    pub fn encounters(&self) -> Vec<Encounter> {
        let mut out = Vec::new();
        for player in self.agents.agents_of_kind(AgentKind::Player) {
            let Some(tile) = self.agents.current_tile(player) else { continue };
            let mut ghosts: Vec<AgentId> = self
                .agents
                .occupants(tile)
                .iter()
                .copied()
                .filter(|&a| self.agents.kind(a).is_some_and(AgentKind::is_ghost))
                .collect();
            ghosts.sort_unstable();
            out.extend(ghosts.into_iter().map(|ghost| Encounter { tick: self.tick, tile, ghost, player }));
        }
        out
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick(&mut self, now: Tick) -> GameResult<TickReport> {
        // ── Phase 1: decisions (read-only world) ──────────────────────────
        let steered = std::mem::replace(&mut self.steering, vec![None; self.agents.count]);
        let decisions = self.decide(now, steered.clone());

        // Nothing moves unless every decision succeeded and every mover is
        // placed.  On failure the queued steering is put back untouched.
        let mut moves = Vec::with_capacity(decisions.len());
        for (i, decision) in decisions.into_iter().enumerate() {
            let agent = AgentId(i as u32);
            let checked: GameResult<Option<Direction>> = decision
                .map_err(Into::into)
                .and_then(|dir| match dir {
                    Some(_) => self.agents.require_tile(agent).map(|_| dir).map_err(Into::into),
                    None => Ok(None),
                });
            match checked {
                Ok(dir) => moves.push(dir),
                Err(e) => {
                    warn!(%agent, tick = %now, error = %e, "decision failed; tick aborted");
                    self.steering = steered;
                    return Err(e);
                }
            }
        }

        // ── Phase 2: commit in ascending AgentId order ────────────────────
        let mut report = TickReport::default();
        for (i, dir) in moves.into_iter().enumerate() {
            let Some(dir) = dir else {
                report.idle += 1;
                continue;
            };
            if self.commit(AgentId(i as u32), dir)? {
                report.moved += 1;
            } else {
                report.blocked += 1;
            }
        }

        // ── Phase 3: encounters ───────────────────────────────────────────
        report.encounters = self.encounters();
        for e in &report.encounters {
            debug!(tick = %now, tile = %e.tile, ghost = %e.ghost, player = %e.player, "encounter");
        }
        trace!(tick = %now, moved = report.moved, idle = report.idle, blocked = report.blocked, "tick done");
        Ok(report)
    }

    /// One decision per agent, indexed by `AgentId`.
    ///
    /// With the `parallel` Cargo feature the strategy calls run on Rayon's
    /// thread pool; each task gets its own `&mut AgentMemory`.
    fn decide(
        &mut self,
        now:     Tick,
        steered: Vec<Option<Direction>>,
    ) -> Vec<StrategyResult<Option<Direction>>> {
        let target = self.target();

        // Explicit field borrows so the borrow checker sees disjoint access.
        let ctx = NavContext::new(&self.board, &self.agents)
            .at_tick(now)
            .with_target(target)
            .with_rules(self.rules);
        let strategy = &self.strategy;
        let memories = &mut self.memories.inner;

        #[cfg(not(feature = "parallel"))]
        {
            memories
                .iter_mut()
                .zip(steered)
                .enumerate()
                .map(|(i, (memory, steer))| match steer {
                    Some(dir) => Ok(Some(dir)),
                    None      => strategy.next_move(AgentId(i as u32), &ctx, memory),
                })
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            memories
                .par_iter_mut()
                .zip(steered.into_par_iter())
                .enumerate()
                .map(|(i, (memory, steer))| match steer {
                    Some(dir) => Ok(Some(dir)),
                    None      => strategy.next_move(AgentId(i as u32), &ctx, memory),
                })
                .collect()
        }
    }

    /// Apply one move if it is still legal.  Returns whether the agent moved.
    fn commit(&mut self, agent: AgentId, dir: Direction) -> GameResult<bool> {
        let from = self.agents.require_tile(agent)?;
        let ctx = NavContext::new(&self.board, &self.agents).with_rules(self.rules);
        let Some(to) = accessible_step(&ctx, from, dir, agent) else {
            debug!(%agent, %from, %dir, "move blocked");
            return Ok(false);
        };
        self.agents.occupy(agent, to)?;
        Ok(true)
    }
}
