//! `gn-board` — tile graph, terrain, and board construction.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`graph`]   | `TileGraph` trait — the read-only query surface strategies use |
//! | [`board`]   | `Board` — tile arena with per-direction neighbour table     |
//! | [`builder`] | `BoardBuilder` — explicit links or automatic grid linking   |
//! | [`terrain`] | `Terrain` and its per-kind admission rule                  |
//! | [`ascii`]   | `parse_ascii` / `parse_rows` fixture loader                |
//! | [`error`]   | `BoardError`, `BoardResult<T>`                             |
//!
//! The board is immutable once built.  Occupancy (which agent stands where)
//! is not stored here; it lives in `gn-agent` and is combined with the board
//! by whatever type implements [`TileGraph`].
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public data types.      |

pub mod ascii;
pub mod board;
pub mod builder;
pub mod error;
pub mod graph;
pub mod terrain;


pub use ascii::{parse_ascii, parse_rows};
pub use board::Board;
pub use builder::BoardBuilder;
pub use error::{BoardError, BoardResult};
pub use graph::TileGraph;
pub use terrain::Terrain;
