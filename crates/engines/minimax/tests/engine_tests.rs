//! Minimax engine through the `Engine` trait, the way a turn loop drives it.

use checkers_core::{Board, Color, Engine, GameStatus, MoveOutcome, SearchLimits};
use minimax_engine::{choose_move, MinimaxEngine, PruningMode, SearchConfig};

fn play_turn(board: &mut Board, mover: Color, engine: &mut dyn Engine) -> bool {
    let result = engine.search(board, mover, SearchLimits::depth(3));
    let Some(turn) = result.best_turn else {
        return false;
    };
    for mv in turn {
        assert_ne!(board.apply_move(mv, mover), MoveOutcome::Illegal, "{mv}");
    }
    true
}

#[test]
fn test_engine_plays_legal_game() {
    let mut black = MinimaxEngine::new();
    let mut white = MinimaxEngine::with_config(SearchConfig {
        pruning: PruningMode::Canonical,
        ..SearchConfig::default()
    });
    let mut board = Board::new();
    let mut mover = Color::Black;

    for _ in 0..40 {
        if board.status(mover) != GameStatus::Ongoing {
            break;
        }
        let engine: &mut dyn Engine = match mover {
            Color::Black => &mut black,
            Color::White => &mut white,
        };
        if !play_turn(&mut board, mover, engine) {
            break;
        }
        mover = mover.other();
    }

    let (men, kings) = board.material(Color::Black);
    assert!(men + kings <= 12);
}

#[test]
fn test_limits_override_configured_depth() {
    let mut engine = MinimaxEngine::new();
    let result = engine.search(&Board::new(), Color::White, SearchLimits::depth(1));
    assert_eq!(result.depth, 1);
    // Root plus one node per opening move.
    assert_eq!(result.nodes, 9);
}

#[test]
fn test_choose_move_matches_default_engine() {
    let board = Board::new();
    let mut engine = MinimaxEngine::new();
    let result = engine.search(&board, Color::Black, SearchLimits::default());
    assert_eq!(choose_move(&board, Color::Black), result.best_turn);
}

#[test]
fn test_engine_names() {
    assert_eq!(MinimaxEngine::new().name(), "Minimax v1.0");
    let canonical = MinimaxEngine::with_config(SearchConfig {
        max_depth: 2,
        pruning: PruningMode::Canonical,
    });
    assert!(canonical.name().contains("canonical"));
    assert_eq!(canonical.config().max_depth, 2);
}
