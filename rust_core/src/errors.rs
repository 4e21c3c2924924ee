//! Errors returned by scoreboard operations.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBoardError {
    #[error("Invalid score - {0}")]
    InvalidScore(i32),
    #[error("Game not found")]
    GameNotFound,
}

pub type Result<T> = std::result::Result<T, ScoreBoardError>;
