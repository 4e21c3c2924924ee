//! Property tests for score validation and summary ordering.
//!
//! Rules:
//! - Any non-negative (home, away) pair is stored and reported exactly
//! - A negative home or away score is rejected with that value, known id or not,
//!   and the registry is left untouched
//! - Summary order depends only on totals, never on insertion order

use proptest::prelude::*;

use crate::{CreateGameRequest, GameId, ScoreBoard, ScoreBoardError, UpdateScoreRequest};

fn started_board() -> (ScoreBoard, GameId) {
    let board = ScoreBoard::new();
    let id = board.start_game(&CreateGameRequest::new("Home", "Away"));
    (board, id)
}

proptest! {
    /// Property: valid scores are reflected exactly
    #[test]
    fn prop_valid_scores_reflected(
        home in 0..=i32::MAX,
        away in 0..=i32::MAX,
    ) {
        let (board, id) = started_board();
        board.update_score(&UpdateScoreRequest::new(id, home, away)).unwrap();

        let summary: Vec<_> = board.in_progress_summary().collect();
        prop_assert_eq!(summary.len(), 1);
        prop_assert_eq!(summary[0].home_score, home as u32);
        prop_assert_eq!(summary[0].away_score, away as u32);
        prop_assert_eq!(summary[0].total_score(), home as u64 + away as u64);
    }

    /// Property: a negative home score wins over any away score
    #[test]
    fn prop_negative_home_rejected(
        home in i32::MIN..0,
        away in any::<i32>(),
        known in any::<bool>(),
    ) {
        let (board, existing) = started_board();
        let before = board.game(existing);
        let target = if known { existing } else { GameId::new() };

        let result = board.update_score(&UpdateScoreRequest::new(target, home, away));

        prop_assert_eq!(result, Err(ScoreBoardError::InvalidScore(home)));
        prop_assert_eq!(board.len(), 1);
        prop_assert_eq!(board.game(existing), before);
    }

    /// Property: a negative away score is rejected when home is valid
    #[test]
    fn prop_negative_away_rejected(
        home in 0..=i32::MAX,
        away in i32::MIN..0,
        known in any::<bool>(),
    ) {
        let (board, existing) = started_board();
        let before = board.game(existing);
        let target = if known { existing } else { GameId::new() };

        let result = board.update_score(&UpdateScoreRequest::new(target, home, away));

        prop_assert_eq!(result, Err(ScoreBoardError::InvalidScore(away)));
        prop_assert_eq!(board.len(), 1);
        prop_assert_eq!(board.game(existing), before);
    }

    /// Property: summary is sorted by total for any insertion order
    #[test]
    fn prop_summary_order_ignores_insertion_order(
        order in Just((0..12i32).collect::<Vec<_>>()).prop_shuffle(),
    ) {
        let board = ScoreBoard::new();
        for &n in &order {
            let id = board.start_game(&CreateGameRequest::new(format!("H{n}"), "A"));
            // Distinct totals so start time never decides
            board.update_score(&UpdateScoreRequest::new(id, n * 3, n)).unwrap();
        }

        let totals: Vec<u64> = board.in_progress_summary().map(|s| s.total_score()).collect();
        let expected: Vec<u64> = (0..12u64).rev().map(|n| n * 4).collect();
        prop_assert_eq!(totals, expected);
    }
}
