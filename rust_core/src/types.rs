//! Identifiers and data-transfer shapes exchanged with the scoreboard.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier of a game on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(Uuid);

impl GameId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for GameId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Request to put a new game on the board
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGameRequest {
    pub home_team_name: String,
    pub away_team_name: String,
}

impl CreateGameRequest {
    pub fn new(home_team_name: impl Into<String>, away_team_name: impl Into<String>) -> Self {
        Self {
            home_team_name: home_team_name.into(),
            away_team_name: away_team_name.into(),
        }
    }
}

/// Request to overwrite the score of a running game.
///
/// Scores are absolute totals, not deltas. They are signed so that bad input
/// from a feed can be represented and rejected instead of wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateScoreRequest {
    pub id: GameId,
    pub home_team_score: i32,
    pub away_team_score: i32,
}

impl UpdateScoreRequest {
    pub fn new(id: GameId, home_team_score: i32, away_team_score: i32) -> Self {
        Self {
            id,
            home_team_score,
            away_team_score,
        }
    }
}

/// Read-only projection of a game for reporting
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub home_team_name: String,
    pub home_score: u32,
    pub away_team_name: String,
    pub away_score: u32,
}

impl GameSummary {
    pub fn new(
        home_team_name: impl Into<String>,
        home_score: u32,
        away_team_name: impl Into<String>,
        away_score: u32,
    ) -> Self {
        Self {
            home_team_name: home_team_name.into(),
            home_score,
            away_team_name: away_team_name.into(),
            away_score,
        }
    }

    pub fn total_score(&self) -> u64 {
        u64::from(self.home_score) + u64::from(self.away_score)
    }
}

impl fmt::Display for GameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.home_team_name, self.home_score, self.away_team_name, self.away_score
        )
    }
}
