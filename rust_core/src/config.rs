//! Scoreboard configuration
//!
//! Values come from environment variables with sensible defaults.

const DEFAULT_INITIAL_CAPACITY: usize = 64;

/// Scoreboard configuration
#[derive(Clone, Debug)]
pub struct ScoreBoardConfig {
    /// Number of games the registry is pre-sized for
    pub initial_capacity: usize,
}

impl Default for ScoreBoardConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl ScoreBoardConfig {
    /// Load configuration from environment variables with sensible defaults
    pub fn from_env() -> Self {
        Self::from_values(std::env::var("SCOREBOARD_INITIAL_CAPACITY").ok())
    }

    /// Build configuration from raw values; unparsable values fall back to defaults
    fn from_values(initial_capacity: Option<String>) -> Self {
        Self {
            initial_capacity: initial_capacity
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_INITIAL_CAPACITY),
        }
    }
}
