//! Scoreboard Core - In-memory tracking of live games.
//!
//! This module provides:
//! - Starting games at 0-0 with a start timestamp
//! - Absolute score updates with validation
//! - Finishing (removing) games
//! - A summary of running games ordered by total score, then most recent start
//!
//! The registry is safe to share between threads via `Arc<ScoreBoard>`.

pub mod config;
pub mod errors;
pub mod models;
pub mod scoreboard;
mod types;

#[cfg(test)]
mod tests_props_scoreboard;

pub use config::ScoreBoardConfig;
pub use errors::{Result, ScoreBoardError};
pub use models::{Game, Team};
pub use scoreboard::ScoreBoard;
pub use types::*;
