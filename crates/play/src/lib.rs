//! Playing cylindrical checkers
//!
//! This crate provides:
//! - `Game`, the explicit game context a turn loop threads through
//! - `HumanPlayer`, line-oriented move entry over any reader/writer pair
//! - `MatchRunner`, engine-vs-engine matches with a W/L/D tally
//!
//! # Usage
//!
//! ```bash
//! # Play black against the minimax engine
//! cargo run -p checkers_play -- play --color black --depth 4
//!
//! # Run a match between minimax and the random baseline
//! cargo run -p checkers_play -- match minimax random --games 20
//! ```

mod config;
mod errors;
mod game;
mod human;
mod match_runner;

pub use config::*;
pub use errors::*;
pub use game::*;
pub use human::*;
pub use match_runner::*;
