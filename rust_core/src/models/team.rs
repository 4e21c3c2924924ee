use serde::{Deserialize, Serialize};

/// A named side in a game and its current score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    name: String,
    score: u32,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Overwrite the score with a new absolute value
    pub fn update_score(&mut self, score: u32) {
        self.score = score;
    }
}
