//! Integration tests for gn-sim.

use gn_agent::{AgentMemories, AgentMemory, AgentStore, AgentStoreBuilder};
use gn_board::{Board, Terrain, parse_ascii};
use gn_core::{AgentId, AgentKind, Direction, GameConfig, GridPos, Tick, TileId};
use gn_strategy::{Idle, NavContext, Roster, Strategy, StrategyResult};

use crate::{Encounter, GameBuilder, GameError, GameObserver, NoopObserver, TickReport};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(total_ticks: u64) -> GameConfig {
    GameConfig { seed: 42, total_ticks, snapshot_interval_ticks: 0 }
}

/// Two corridors joined at both ends, a player-only gate in the middle wall.
const ARENA: &str = "
#########
#P.....G#
#.##=##.#
#G.....G#
#########
";

fn arena() -> Board {
    parse_ascii(ARENA, false).unwrap()
}

fn agents(board: &Board, kinds: &[AgentKind]) -> (AgentStore, AgentMemories) {
    AgentStoreBuilder::new(board.tile_count(), 42).with_agents(kinds.iter().copied()).build()
}

fn tile(board: &Board, x: i32, y: i32) -> TileId {
    board.tile_at(GridPos::new(x, y)).unwrap()
}

/// Always asks to move in one direction, legal or not.
struct Always(Direction);

impl Strategy for Always {
    fn next_move(
        &self,
        agent:   AgentId,
        ctx:     &NavContext<'_>,
        _memory: &mut AgentMemory,
    ) -> StrategyResult<Option<Direction>> {
        ctx.current_tile(agent)?;
        Ok(Some(self.0))
    }
}

// ── GameBuilder validation ────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn places_agents_on_spawns() {
        let board = arena();
        let (store, memories) = agents(&board, &[AgentKind::Player, AgentKind::Blinky, AgentKind::Clyde]);
        let game = GameBuilder::new(test_config(10), board, store, memories, Idle).build().unwrap();
        assert_eq!(game.agents.current_tile(AgentId(0)), Some(tile(&game.board, 1, 1)));
        assert_eq!(game.agents.current_tile(AgentId(1)), Some(tile(&game.board, 7, 1)));
        assert_eq!(game.agents.current_tile(AgentId(2)), Some(tile(&game.board, 1, 3)));
        assert_eq!(game.tick, Tick::ZERO);
    }

    #[test]
    fn ghost_spawns_cycle() {
        let board = arena();
        let kinds = [AgentKind::Blinky, AgentKind::Pinky, AgentKind::Inky, AgentKind::Clyde];
        let (store, memories) = agents(&board, &kinds);
        let game = GameBuilder::new(test_config(10), board, store, memories, Idle).build().unwrap();
        assert_eq!(game.agents.current_tile(AgentId(3)), game.agents.current_tile(AgentId(0)));
    }

    #[test]
    fn keeps_existing_placement() {
        let board = arena();
        let (mut store, memories) = agents(&board, &[AgentKind::Blinky]);
        let start = tile(&board, 4, 1);
        store.occupy(AgentId(0), start).unwrap();
        let game = GameBuilder::new(test_config(10), board, store, memories, Idle).build().unwrap();
        assert_eq!(game.agents.current_tile(AgentId(0)), Some(start));
    }

    #[test]
    fn explicit_positions() {
        let board = arena();
        let (store, memories) = agents(&board, &[AgentKind::Player, AgentKind::Inky]);
        let positions = vec![tile(&board, 3, 3), tile(&board, 5, 3)];
        let game = GameBuilder::new(test_config(10), board, store, memories, Idle)
            .initial_positions(positions.clone())
            .build()
            .unwrap();
        assert_eq!(game.agents.current_tile(AgentId(0)), Some(positions[0]));
        assert_eq!(game.agents.current_tile(AgentId(1)), Some(positions[1]));
    }

    #[test]
    fn position_count_mismatch_errors() {
        let board = arena();
        let (store, memories) = agents(&board, &[AgentKind::Player, AgentKind::Inky]);
        let positions = vec![tile(&board, 3, 3)];
        let result = GameBuilder::new(test_config(10), board, store, memories, Idle)
            .initial_positions(positions)
            .build();
        assert!(matches!(result, Err(GameError::AgentCountMismatch { expected: 2, got: 1, .. })));
    }

    #[test]
    fn memory_count_mismatch_errors() {
        let board = arena();
        let (store, _) = agents(&board, &[AgentKind::Player, AgentKind::Inky]);
        let (_, memories) = agents(&board, &[AgentKind::Player]);
        let result = GameBuilder::new(test_config(10), board, store, memories, Idle).build();
        assert!(matches!(result, Err(GameError::AgentCountMismatch { what: "agent memories", .. })));
    }

    #[test]
    fn store_for_another_board_errors() {
        let board = arena();
        let (store, memories) = AgentStoreBuilder::new(3, 0).with_agent(AgentKind::Blinky).build();
        let result = GameBuilder::new(test_config(10), board, store, memories, Idle).build();
        assert!(matches!(result, Err(GameError::Config(_))));
    }

    #[test]
    fn missing_spawn_errors() {
        let board = parse_ascii("#P..#", false).unwrap();
        let (store, memories) = agents(&board, &[AgentKind::Player, AgentKind::Pinky]);
        let result = GameBuilder::new(test_config(10), board, store, memories, Idle).build();
        assert!(matches!(result, Err(GameError::NoSpawn(AgentKind::Pinky))));
    }

    #[test]
    fn start_on_wall_errors() {
        let board = arena();
        let (store, memories) = agents(&board, &[AgentKind::Blinky]);
        let wall = tile(&board, 0, 0);
        let result = GameBuilder::new(test_config(10), board, store, memories, Idle)
            .initial_positions(vec![wall])
            .build();
        assert!(matches!(result, Err(GameError::InaccessibleStart { agent: AgentId(0), .. })));
    }

    #[test]
    fn ghost_on_gate_errors_player_does_not() {
        let board = arena();
        let gate = tile(&board, 4, 2);
        assert_eq!(board.terrain_of(gate), Some(Terrain::PlayerOnly));

        let (store, memories) = agents(&board, &[AgentKind::Player]);
        let ok = GameBuilder::new(test_config(10), board.clone(), store, memories, Idle)
            .initial_positions(vec![gate])
            .build();
        assert!(ok.is_ok());

        let (store, memories) = agents(&board, &[AgentKind::Inky]);
        let bad = GameBuilder::new(test_config(10), board, store, memories, Idle)
            .initial_positions(vec![gate])
            .build();
        assert!(matches!(bad, Err(GameError::InaccessibleStart { .. })));
    }
}

// ── Basic run ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    fn classic_game(total: u64, seed: u64) -> crate::Game<Roster> {
        let board = arena();
        let kinds = [AgentKind::Player, AgentKind::Blinky, AgentKind::Pinky, AgentKind::Inky, AgentKind::Clyde];
        let (store, memories) = AgentStoreBuilder::new(board.tile_count(), seed)
            .with_agents(kinds)
            .build();
        let home = tile(&board, 7, 3);
        let config = GameConfig { seed, total_ticks: total, snapshot_interval_ticks: 0 };
        GameBuilder::new(config, board, store, memories, Roster::classic(home)).build().unwrap()
    }

    #[test]
    fn runs_to_end_tick() {
        let mut game = classic_game(10, 1);
        game.run(&mut NoopObserver).unwrap();
        assert_eq!(game.tick, Tick(10));
    }

    #[test]
    fn run_ticks_advances() {
        let mut game = classic_game(100, 1);
        game.run_ticks(5, &mut NoopObserver).unwrap();
        assert_eq!(game.tick, Tick(5));
        game.run_ticks(3, &mut NoopObserver).unwrap();
        assert_eq!(game.tick, Tick(8));
    }

    /// Observer that counts hook calls.
    #[derive(Default)]
    struct Counter {
        starts:    usize,
        ends:      usize,
        snapshots: Vec<Tick>,
        finished:  Option<Tick>,
    }

    impl GameObserver for Counter {
        fn on_tick_start(&mut self, _t: Tick) { self.starts += 1; }
        fn on_tick_end(&mut self, _t: Tick, _r: &TickReport) { self.ends += 1; }
        fn on_snapshot(&mut self, t: Tick, _b: &Board, _a: &AgentStore) { self.snapshots.push(t); }
        fn on_game_end(&mut self, t: Tick) { self.finished = Some(t); }
    }

    #[test]
    fn observer_called_correct_number_of_times() {
        let mut game = classic_game(7, 1);
        let mut obs = Counter::default();
        game.run(&mut obs).unwrap();
        assert_eq!(obs.starts, 7);
        assert_eq!(obs.ends, 7);
        assert_eq!(obs.finished, Some(Tick(7)));
        assert!(obs.snapshots.is_empty());
    }

    #[test]
    fn snapshots_at_interval() {
        let mut game = classic_game(10, 1);
        game.config.snapshot_interval_ticks = 3;
        let mut obs = Counter::default();
        game.run(&mut obs).unwrap();
        assert_eq!(obs.snapshots, vec![Tick(0), Tick(3), Tick(6), Tick(9)]);
    }

    #[test]
    fn same_seed_same_game() {
        let positions = |seed| {
            let mut game = classic_game(60, seed);
            game.run(&mut NoopObserver).unwrap();
            let at: Vec<Option<TileId>> = game.agents.agent_ids().map(|a| game.agents.current_tile(a)).collect();
            at
        };
        assert_eq!(positions(5), positions(5));
    }

    #[test]
    fn agents_stay_on_admitted_tiles() {
        let mut game = classic_game(200, 9);
        for _ in 0..200 {
            game.step(&mut NoopObserver).unwrap();
            for agent in game.agents.agent_ids() {
                let t = game.agents.current_tile(agent).unwrap();
                let kind = game.agents.kind(agent).unwrap();
                assert!(game.board.admits(t, kind), "{kind} on {t} at {}", game.tick);
                assert!(game.agents.occupants(t).contains(&agent));
            }
        }
    }

    #[test]
    fn ghosts_move() {
        let mut game = classic_game(1, 3);
        let report = game.step(&mut NoopObserver).unwrap();
        // The player idles; four ghosts in open corridors all move.
        assert_eq!(report.moved, 4);
        assert_eq!(report.idle, 1);
    }
}

// ── Commit phase ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod commit_tests {
    use gn_strategy::AccessRules;

    use super::*;

    #[test]
    fn steer_moves_the_player_once() {
        let board = arena();
        let (store, memories) = agents(&board, &[AgentKind::Player]);
        let mut game = GameBuilder::new(test_config(10), board, store, memories, Idle).build().unwrap();

        game.steer(AgentId(0), Direction::East).unwrap();
        let report = game.step(&mut NoopObserver).unwrap();
        assert_eq!(report.moved, 1);
        assert_eq!(game.agents.current_tile(AgentId(0)), Some(tile(&game.board, 2, 1)));

        // Steering is consumed; Idle takes over again.
        let report = game.step(&mut NoopObserver).unwrap();
        assert_eq!(report.idle, 1);
        assert_eq!(game.agents.current_tile(AgentId(0)), Some(tile(&game.board, 2, 1)));
    }

    #[test]
    fn steer_into_wall_is_blocked() {
        let board = arena();
        let (store, memories) = agents(&board, &[AgentKind::Player]);
        let mut game = GameBuilder::new(test_config(10), board, store, memories, Idle).build().unwrap();
        let start = game.agents.current_tile(AgentId(0));

        game.steer(AgentId(0), Direction::North).unwrap();
        let report = game.step(&mut NoopObserver).unwrap();
        assert_eq!(report.blocked, 1);
        assert_eq!(game.agents.current_tile(AgentId(0)), start);
    }

    #[test]
    fn steer_unknown_agent_errors() {
        let board = arena();
        let (store, memories) = agents(&board, &[AgentKind::Player]);
        let mut game = GameBuilder::new(test_config(10), board, store, memories, Idle).build().unwrap();
        assert!(matches!(game.steer(AgentId(4), Direction::East), Err(GameError::Core(_))));
    }

    #[test]
    fn walled_in_ghost_stays() {
        let board = parse_ascii("###\n#G#\n###", false).unwrap();
        let (store, memories) = agents(&board, &[AgentKind::Blinky]);
        let mut game = GameBuilder::new(test_config(10), board, store, memories, Roster::classic(TileId(0)))
            .build()
            .unwrap();
        let start = game.agents.current_tile(AgentId(0)).unwrap();
        for _ in 0..10 {
            let report = game.step(&mut NoopObserver).unwrap();
            assert_eq!(report.idle, 1);
            assert_eq!(report.moved, 0);
        }
        assert_eq!(game.agents.occupants(start), &[AgentId(0)]);
    }

    #[test]
    fn ghost_never_enters_gate() {
        // A ghost directly above the gate pushing south.
        let board = arena();
        let (store, memories) = agents(&board, &[AgentKind::Inky]);
        let above = tile(&board, 4, 1);
        let mut game = GameBuilder::new(test_config(10), board, store, memories, Always(Direction::South))
            .initial_positions(vec![above])
            .build()
            .unwrap();
        let report = game.step(&mut NoopObserver).unwrap();
        assert_eq!(report.blocked, 1);
        assert_eq!(game.agents.current_tile(AgentId(0)), Some(above));
    }

    #[test]
    fn failed_decision_moves_nobody() {
        let board = arena();
        let (store, memories) = agents(&board, &[AgentKind::Player, AgentKind::Blinky]);
        let mut game = GameBuilder::new(test_config(10), board, store, memories, Always(Direction::East))
            .build()
            .unwrap();
        let player_start = game.agents.current_tile(AgentId(0));
        game.agents.vacate(AgentId(1)).unwrap();

        let result = game.step(&mut NoopObserver);
        assert!(matches!(result, Err(GameError::Strategy(_))));
        assert_eq!(game.agents.current_tile(AgentId(0)), player_start);
        assert_eq!(game.tick, Tick::ZERO);
    }

    #[test]
    fn steering_survives_an_aborted_tick() {
        let board = arena();
        let (store, memories) = agents(&board, &[AgentKind::Player, AgentKind::Blinky]);
        let mut game = GameBuilder::new(test_config(10), board, store, memories, Idle).build().unwrap();
        let blinky_home = game.agents.vacate(AgentId(1)).unwrap().unwrap();

        game.steer(AgentId(0), Direction::East).unwrap();
        game.steer(AgentId(1), Direction::West).unwrap();
        assert!(matches!(game.step(&mut NoopObserver), Err(GameError::Agent(_))));
        assert_eq!(game.agents.current_tile(AgentId(0)), Some(tile(&game.board, 1, 1)));

        game.agents.occupy(AgentId(1), blinky_home).unwrap();
        let report = game.step(&mut NoopObserver).unwrap();
        assert_eq!(report.moved, 2);
        assert_eq!(game.agents.current_tile(AgentId(0)), Some(tile(&game.board, 2, 1)));
        assert_eq!(game.agents.current_tile(AgentId(1)), Some(tile(&game.board, 6, 1)));
    }

    fn convoy(rules: AccessRules) -> (TickReport, Vec<Option<TileId>>) {
        let board = parse_ascii("#####\n#...#\n#####", false).unwrap();
        let (store, memories) = agents(&board, &[AgentKind::Blinky, AgentKind::Pinky]);
        let positions = vec![tile(&board, 1, 1), tile(&board, 2, 1)];
        let mut game = GameBuilder::new(test_config(10), board, store, memories, Always(Direction::East))
            .rules(rules)
            .initial_positions(positions)
            .build()
            .unwrap();
        let report = game.step(&mut NoopObserver).unwrap();
        let at = game.agents.agent_ids().map(|a| game.agents.current_tile(a)).collect();
        (report, at)
    }

    #[test]
    fn commit_rechecks_occupancy() {
        // Ghost 0 commits first; ghost 1 still holds the tile it wants.
        let (report, at) = convoy(AccessRules { ghosts_block_ghosts: true });
        assert_eq!(report.moved, 1);
        assert_eq!(report.blocked, 1);
        assert_eq!(at[0], Some(TileId(6)));
        assert_eq!(at[1], Some(TileId(8)));
    }

    #[test]
    fn ghosts_stack_without_blocking_rule() {
        let (report, at) = convoy(AccessRules::default());
        assert_eq!(report.moved, 2);
        assert_eq!(at[0], Some(TileId(7)));
        assert_eq!(at[1], Some(TileId(8)));
    }
}

// ── Encounters ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod encounter_tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<Encounter>);

    impl GameObserver for Recorder {
        fn on_encounter(&mut self, e: &Encounter) {
            self.0.push(*e);
        }
    }

    fn corridor() -> Board {
        parse_ascii("#####\n#P.G#\n#####", false).unwrap()
    }

    #[test]
    fn ghost_walks_onto_player() {
        let board = corridor();
        let (store, memories) = agents(&board, &[AgentKind::Player, AgentKind::Blinky]);
        let roster = Roster::new().with(AgentKind::Player, Idle).with(AgentKind::Blinky, Always(Direction::West));
        let mut game = GameBuilder::new(test_config(10), board, store, memories, roster).build().unwrap();

        let mut rec = Recorder::default();
        let first = game.step(&mut rec).unwrap();
        assert!(first.encounters.is_empty());

        let second = game.step(&mut rec).unwrap();
        let player_tile = tile(&game.board, 1, 1);
        let expected = Encounter { tick: Tick(1), tile: player_tile, ghost: AgentId(1), player: AgentId(0) };
        assert_eq!(second.encounters, vec![expected]);
        assert_eq!(rec.0, vec![expected]);
    }

    #[test]
    fn player_walks_onto_ghost() {
        let board = corridor();
        let (store, memories) = agents(&board, &[AgentKind::Player, AgentKind::Clyde]);
        let mut game = GameBuilder::new(test_config(10), board, store, memories, Idle).build().unwrap();
        game.steer(AgentId(0), Direction::East).unwrap();
        game.step(&mut NoopObserver).unwrap();
        game.steer(AgentId(0), Direction::East).unwrap();
        let report = game.step(&mut NoopObserver).unwrap();
        assert_eq!(report.encounters.len(), 1);
        assert_eq!(report.encounters[0].ghost, AgentId(1));
    }

    #[test]
    fn ghosts_together_are_not_an_encounter() {
        let board = parse_ascii("#GG#", false).unwrap();
        let (store, memories) = agents(&board, &[AgentKind::Blinky, AgentKind::Inky]);
        let same = tile(&board, 1, 0);
        let mut game = GameBuilder::new(test_config(10), board, store, memories, Idle)
            .initial_positions(vec![same, same])
            .build()
            .unwrap();
        assert!(game.step(&mut NoopObserver).unwrap().encounters.is_empty());
    }

    #[test]
    fn target_is_the_player_tile() {
        let board = corridor();
        let (store, memories) = agents(&board, &[AgentKind::Blinky, AgentKind::Player]);
        let game = GameBuilder::new(test_config(10), board, store, memories, Idle).build().unwrap();
        assert_eq!(game.target(), Some(tile(&game.board, 1, 1)));
    }
}

// ── Parallel decision phase ───────────────────────────────────────────────────

#[cfg(all(test, feature = "parallel"))]
mod parallel_tests {
    use gn_strategy::select::accessible_step;
    use gn_strategy::{AccessRules, Wanderer};

    use super::*;
    use crate::Game;

    fn busy_game(seed: u64) -> Game<Roster> {
        let board = arena();
        let kinds = [AgentKind::Player, AgentKind::Blinky, AgentKind::Pinky, AgentKind::Inky, AgentKind::Clyde];
        let (store, memories) = AgentStoreBuilder::new(board.tile_count(), seed).with_agents(kinds).build();
        let roster = Roster::classic(tile(&board, 7, 3)).with(AgentKind::Player, Wanderer);
        let config = GameConfig { seed, total_ticks: 150, snapshot_interval_ticks: 0 };
        GameBuilder::new(config, board, store, memories, roster)
            .rules(AccessRules { ghosts_block_ghosts: true })
            .build()
            .unwrap()
    }

    fn tiles(game: &Game<Roster>) -> Vec<Option<TileId>> {
        game.agents.agent_ids().map(|a| game.agents.current_tile(a)).collect()
    }

    /// One tick decided agent by agent on the calling thread.
    fn step_in_order(game: &mut Game<Roster>) {
        let ctx = NavContext::new(&game.board, &game.agents)
            .at_tick(game.tick)
            .with_target(game.target())
            .with_rules(game.rules);
        let moves: Vec<Option<Direction>> = game
            .memories
            .inner
            .iter_mut()
            .enumerate()
            .map(|(i, memory)| game.strategy.next_move(AgentId(i as u32), &ctx, memory).unwrap())
            .collect();

        for (i, dir) in moves.into_iter().enumerate() {
            let agent = AgentId(i as u32);
            let Some(dir) = dir else { continue };
            let from = game.agents.current_tile(agent).unwrap();
            let ctx = NavContext::new(&game.board, &game.agents).with_rules(game.rules);
            if let Some(to) = accessible_step(&ctx, from, dir, agent) {
                game.agents.occupy(agent, to).unwrap();
            }
        }
        game.tick = game.tick.next();
    }

    #[test]
    fn parallel_matches_sequential() {
        let mut parallel = busy_game(11);
        let mut sequential = busy_game(11);
        for _ in 0..150 {
            parallel.step(&mut NoopObserver).unwrap();
            step_in_order(&mut sequential);
            assert_eq!(tiles(&parallel), tiles(&sequential), "diverged at {}", parallel.tick);
        }
    }

    #[test]
    fn thread_count_does_not_matter() {
        let run = |threads: usize| {
            let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build().unwrap();
            pool.install(|| {
                let mut game = busy_game(23);
                game.run(&mut NoopObserver).unwrap();
                tiles(&game)
            })
        };
        assert_eq!(run(1), run(4));
    }
}
