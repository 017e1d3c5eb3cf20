use super::*;
use checkers_core::{Board, Move, SearchLimits, SearchResult};
use random_engine::RandomEngine;

/// Engine that always answers with the same, usually illegal, turn.
struct Stubborn;

impl Engine for Stubborn {
    fn search(&mut self, _board: &Board, _mover: Color, limits: SearchLimits) -> SearchResult {
        SearchResult {
            best_turn: Some(vec![Move::new(0, 0, 7, 7)]),
            score: 0,
            depth: limits.depth,
            nodes: 1,
        }
    }

    fn name(&self) -> &str {
        "stubborn"
    }
}

#[test]
fn test_self_play() {
    let config = MatchConfig {
        num_games: 2,
        depth: 2,
        max_turns: 30,
        verbose: false,
        ..Default::default()
    };
    let mut engine1 = minimax_for(&config);
    let mut engine2 = minimax_for(&config);

    let runner = MatchRunner::new(config);
    let result = runner.run_match(&mut engine1, &mut engine2);

    // Self-play should complete without panic
    assert_eq!(result.total_games(), 2);
}

#[test]
fn test_illegal_turn_forfeits() {
    let config = MatchConfig {
        num_games: 2,
        verbose: false,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    let mut random = RandomEngine::with_seed(3);
    let mut stubborn = Stubborn;

    let result = runner.run_match(&mut random, &mut stubborn);
    assert_eq!(result.wins, 2);
    assert_eq!(result.score(), 1.0);
}

#[test]
fn test_turn_limit_is_a_draw() {
    let config = MatchConfig {
        max_turns: 0,
        verbose: false,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    let mut a = RandomEngine::with_seed(1);
    let mut b = RandomEngine::with_seed(2);
    assert_eq!(runner.play_game(&mut a, &mut b), GameResult::Draw);
}

#[test]
fn test_quick_match_counts_games() {
    let mut a = RandomEngine::with_seed(11);
    let mut b = RandomEngine::with_seed(12);
    let result = quick_match(&mut a, &mut b, 3, 1);
    assert_eq!(result.total_games(), 3);
    assert!((0.0..=1.0).contains(&result.score()));
}

#[test]
fn test_empty_match_scores_even() {
    assert_eq!(MatchResult::new().score(), 0.5);
}
