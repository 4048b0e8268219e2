//! maze — a small end-to-end run of the ghostnav engine.
//!
//! Loads an ASCII maze, puts a wandering player and the four classic ghosts
//! on their spawn points, plays a fixed number of ticks, and logs every time
//! a ghost catches the player.  Set `RUST_LOG=debug` (or `trace`) to watch
//! individual decisions.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gn_agent::{AgentStore, AgentStoreBuilder};
use gn_board::{Board, parse_ascii};
use gn_core::{AgentKind, GameConfig, GridPos, Tick};
use gn_sim::{Encounter, GameBuilder, GameObserver, TickReport};
use gn_strategy::{AccessRules, Roster, Wanderer};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:           u64 = 42;
const TOTAL_TICKS:    u64 = 200;
const SNAPSHOT_TICKS: u64 = 50;

// `=` is a gate only the player may cross.
const MAZE: &str = "
###############
#P.....#.....G#
#.###.###.###.#
#.#.........#.#
#.#.##=.##..#.#
#...#G...G#...#
#.#.#######.#.#
#.....G.......#
###############
";

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct MazeLog {
    caught:  usize,
    moves:   usize,
    blocked: usize,
}

impl GameObserver for MazeLog {
    fn on_encounter(&mut self, e: &Encounter) {
        self.caught += 1;
        info!(tick = %e.tick, ghost = %e.ghost, tile = %e.tile, "player caught");
    }

    fn on_tick_end(&mut self, _tick: Tick, report: &TickReport) {
        self.moves += report.moved;
        self.blocked += report.blocked;
    }

    fn on_snapshot(&mut self, tick: Tick, board: &Board, agents: &AgentStore) {
        println!("--- {tick} ---");
        println!("{}", render(board, agents));
    }

    fn on_game_end(&mut self, final_tick: Tick) {
        info!(%final_tick, caught = self.caught, moves = self.moves, blocked = self.blocked, "game over");
    }
}

/// Draw the board with agents on top: `@` for the player, the ghost's
/// initial otherwise.
fn render(board: &Board, agents: &AgentStore) -> String {
    let width = board.positions().iter().map(|p| p.x).max().unwrap_or(-1) + 1;
    let height = board.positions().iter().map(|p| p.y).max().unwrap_or(-1) + 1;
    let mut out = String::new();
    for y in 0..height {
        for x in 0..width {
            let ch = match board.tile_at(GridPos::new(x, y)) {
                None => ' ',
                Some(tile) => match agents.occupants(tile).first().and_then(|&a| agents.kind(a)) {
                    Some(AgentKind::Player) => '@',
                    Some(kind) => kind.as_str().chars().next().map_or('?', |c| c.to_ascii_uppercase()),
                    None => board.terrain_of(tile).map_or(' ', |t| t.symbol()),
                },
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== maze — ghostnav demo ===");
    println!("Ticks: {TOTAL_TICKS}  |  Seed: {SEED}");
    println!();

    // 1. Board.
    let board = parse_ascii(MAZE, false)?;
    println!(
        "Board: {} tiles, {} ghost spawns, {} one-way links",
        board.tile_count(),
        board.ghost_starts().len(),
        board.asymmetric_links().len(),
    );
    let clyde_home = *board
        .ghost_starts()
        .last()
        .ok_or_else(|| anyhow::anyhow!("maze has no ghost spawn"))?;

    // 2. Agents: the player, then one ghost of each personality.
    let (agents, memories) = AgentStoreBuilder::new(board.tile_count(), SEED)
        .with_agent(AgentKind::Player)
        .with_agents(AgentKind::GHOSTS)
        .build();

    // 3. Strategies.  The player has no input here, so it wanders too.
    let roster = Roster::classic(clyde_home).with(AgentKind::Player, Wanderer);

    // 4. Game.
    let config = GameConfig { seed: SEED, total_ticks: TOTAL_TICKS, snapshot_interval_ticks: SNAPSHOT_TICKS };
    let mut game = GameBuilder::new(config, board, agents, memories, roster)
        .rules(AccessRules { ghosts_block_ghosts: true })
        .build()?;

    let mut log = MazeLog::default();
    game.run(&mut log)?;

    println!();
    println!("Final board at {}:", game.tick);
    println!("{}", render(&game.board, &game.agents));
    println!("Player caught {} times; {} moves, {} blocked.", log.caught, log.moves, log.blocked);
    Ok(())
}
