//! `gn-sim` — tick loop driver for the ghostnav engine.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Decide   — target = first player's tile; for every agent, take its
//!                steered direction or ask the Strategy
//!                (parallel with the `parallel` feature).
//!   ② Commit   — in ascending AgentId order: re-check the neighbour is
//!                still accessible, then AgentStore::occupy.
//!   ③ Report   — ghosts sharing a tile with a player become Encounters;
//!                observer hooks fire.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the decision phase on Rayon's thread pool.        |
//!
//! # Quick-start
//!
//! ```rust
//! use gn_agent::AgentStoreBuilder;
//! use gn_board::parse_ascii;
//! use gn_core::{AgentKind, GameConfig};
//! use gn_sim::{GameBuilder, NoopObserver};
//! use gn_strategy::Roster;
//!
//! let board = parse_ascii("
//! #######
//! #P...G#
//! #######
//! ", false)?;
//! let config = GameConfig { total_ticks: 20, ..GameConfig::default() };
//! let (agents, memories) = AgentStoreBuilder::new(board.tile_count(), config.seed)
//!     .with_agent(AgentKind::Player)
//!     .with_agent(AgentKind::Blinky)
//!     .build();
//! let home = board.ghost_starts()[0];
//!
//! let mut game = GameBuilder::new(config, board, agents, memories, Roster::classic(home))
//!     .build()?;
//! game.run(&mut NoopObserver)?;
//! assert_eq!(game.tick.0, 20);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod error;
pub mod game;
pub mod observer;

#[cfg(test)]
mod tests;

pub use builder::GameBuilder;
pub use error::{GameError, GameResult};
pub use game::Game;
pub use observer::{Encounter, GameObserver, NoopObserver, TickReport};
