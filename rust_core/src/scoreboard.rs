//! Live scoreboard of games in progress.
//!
//! This module provides:
//! - Thread-safe registry of running games keyed by `GameId`
//! - Score validation ahead of any lookup
//! - Summary ordered by total score, then most recently started

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

use crate::config::ScoreBoardConfig;
use crate::errors::{Result, ScoreBoardError};
use crate::models::Game;
use crate::types::{CreateGameRequest, GameId, GameSummary, UpdateScoreRequest};

/// Registry of games currently in progress.
///
/// All operations take `&self`; share the board between threads with an
/// `Arc<ScoreBoard>`. A score update holds the write lock for both teams, so
/// a concurrent summary sees either the old pair of scores or the new pair.
#[derive(Debug, Default)]
pub struct ScoreBoard {
    games: RwLock<FxHashMap<GameId, Game>>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &ScoreBoardConfig) -> Self {
        let mut games = FxHashMap::default();
        games.reserve(config.initial_capacity);
        Self {
            games: RwLock::new(games),
        }
    }

    pub fn from_env() -> Self {
        Self::with_config(&ScoreBoardConfig::from_env())
    }

    /// Start a 0-0 game and return its id
    pub fn start_game(&self, request: &CreateGameRequest) -> GameId {
        let id = GameId::new();
        let game = Game::new(
            request.home_team_name.as_str(),
            request.away_team_name.as_str(),
        );
        self.games.write().insert(id, game);

        info!(
            "Game started: id={}, {} vs {}",
            id, request.home_team_name, request.away_team_name
        );
        id
    }

    /// Overwrite both scores of a running game.
    ///
    /// Scores are validated home first, then away, before the game is looked
    /// up, so a negative score is reported even for an unknown id.
    pub fn update_score(&self, request: &UpdateScoreRequest) -> Result<()> {
        let home_score = validate_score(request.home_team_score)?;
        let away_score = validate_score(request.away_team_score)?;

        let mut games = self.games.write();
        let Some(game) = games.get_mut(&request.id) else {
            debug!("Score update for unknown game {}", request.id);
            return Err(ScoreBoardError::GameNotFound);
        };
        game.update_scores(home_score, away_score);

        debug!(
            "Score updated: id={}, score={}-{}",
            request.id, home_score, away_score
        );
        Ok(())
    }

    /// Remove a game from the board. Unknown ids are ignored.
    pub fn finish_game(&self, id: GameId) {
        let removed = self.games.write().remove(&id);
        if let Some(game) = removed {
            info!("Game finished: id={}, final={}", id, game.summary());
        }
    }

    /// Snapshot of running games, highest total score first and, on equal
    /// totals, the most recently started first.
    pub fn in_progress_summary(&self) -> impl ExactSizeIterator<Item = GameSummary> {
        let mut games: Vec<Game> = self.games.read().values().cloned().collect();
        games.sort_by(|a, b| {
            b.total_score()
                .cmp(&a.total_score())
                .then_with(|| b.start_time().cmp(&a.start_time()))
        });

        debug!("Summary generated for {} games", games.len());
        games.into_iter().map(|game| game.summary())
    }

    /// Copy of the game with the given id, if it is still running
    pub fn game(&self, id: GameId) -> Option<Game> {
        self.games.read().get(&id).cloned()
    }

    pub fn contains(&self, id: GameId) -> bool {
        self.games.read().contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.games.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.read().is_empty()
    }

    #[cfg(test)]
    fn insert(&self, game: Game) -> GameId {
        let id = GameId::new();
        self.games.write().insert(id, game);
        id
    }
}

fn validate_score(score: i32) -> Result<u32> {
    u32::try_from(score).map_err(|_| {
        debug!("Rejected invalid score {}", score);
        ScoreBoardError::InvalidScore(score)
    })
}

// ============================================================================
// Tests
// ============================================================================
