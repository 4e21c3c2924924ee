use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::team::Team;
use crate::types::GameSummary;

/// A game between two teams, stamped with the instant it started.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    home_team: Team,
    away_team: Team,
    start_time: DateTime<Utc>,
}

impl Game {
    /// Create a 0-0 game started now
    pub fn new(home_team_name: impl Into<String>, away_team_name: impl Into<String>) -> Self {
        Self::with_start_time(home_team_name, away_team_name, Utc::now())
    }

    pub fn with_start_time(
        home_team_name: impl Into<String>,
        away_team_name: impl Into<String>,
        start_time: DateTime<Utc>,
    ) -> Self {
        Self {
            home_team: Team::new(home_team_name),
            away_team: Team::new(away_team_name),
            start_time,
        }
    }

    pub fn home_team(&self) -> &Team {
        &self.home_team
    }

    pub fn away_team(&self) -> &Team {
        &self.away_team
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn update_scores(&mut self, home_score: u32, away_score: u32) {
        self.home_team.update_score(home_score);
        self.away_team.update_score(away_score);
    }

    /// Combined score of both teams
    pub fn total_score(&self) -> u64 {
        u64::from(self.home_team.score()) + u64::from(self.away_team.score())
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary::new(
            self.home_team.name(),
            self.home_team.score(),
            self.away_team.name(),
            self.away_team.score(),
        )
    }
}
