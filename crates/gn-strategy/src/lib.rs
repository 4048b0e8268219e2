//! `gn-strategy` — move selection and ghost personalities.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                       |
//! |--------------|----------------------------------------------------------------|
//! | [`select`]   | `random_move` fallback selector, `step_toward` greedy step     |
//! | [`context`]  | `NavContext<'a>` — read-only tick snapshot, a `TileGraph`      |
//! | [`strategy`] | `Strategy` trait                                               |
//! | [`wander`]   | `Wanderer` — random fallback only                              |
//! | [`shy`]      | `ShyChaser`, `ShyConfig` — wander far, retreat when close      |
//! | [`pursue`]   | `Pursuer` — greedy chase                                       |
//! | [`idle`]     | `Idle` — never moves                                           |
//! | [`roster`]   | `Roster` — per-`AgentKind` dispatch                            |
//! | [`error`]    | `StrategyError`, `StrategyResult<T>`                           |
//!
//! # Design notes
//!
//! A decision is a pure function of the [`NavContext`] plus the deciding
//! agent's [`AgentMemory`][gn_agent::AgentMemory].  Strategies never mutate
//! the board or the agent store, so the game loop can run every decision of
//! a tick (in parallel if it wants) before committing any move.
//!
//! "No legal move" is always `Ok(None)`.  Errors are reserved for usage
//! mistakes such as asking about an agent that was never placed.

pub mod context;
pub mod error;
pub mod idle;
pub mod pursue;
pub mod roster;
pub mod select;
pub mod shy;
pub mod strategy;
pub mod wander;


pub use context::{AccessRules, NavContext};
pub use error::{StrategyError, StrategyResult};
pub use idle::Idle;
pub use pursue::Pursuer;
pub use roster::Roster;
pub use select::{random_move, random_move_for, step_toward};
pub use shy::{ShyChaser, ShyConfig};
pub use strategy::Strategy;
pub use wander::Wanderer;
