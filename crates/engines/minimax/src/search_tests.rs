use super::*;
use checkers_core::{is_game_over, MoveOutcome};

fn config(max_depth: u8, pruning: PruningMode) -> SearchConfig {
    SearchConfig { max_depth, pruning }
}

fn replay(board: &Board, mover: Color, turn: &[Move]) -> Board {
    let mut b = board.clone();
    for (i, mv) in turn.iter().enumerate() {
        let outcome = b.apply_move(*mv, mover);
        if i + 1 == turn.len() {
            assert_eq!(outcome, MoveOutcome::Completed, "turn must end on {mv}");
        } else {
            assert!(
                matches!(outcome, MoveOutcome::ChainPending { at } if at == mv.to()),
                "move {mv} should leave a chain pending, got {outcome:?}"
            );
        }
    }
    b
}

#[test]
fn test_start_position_returns_legal_turn() {
    let board = Board::new();
    for mover in [Color::Black, Color::White] {
        let outcome = pick_best_turn(&board, mover, &SearchConfig::default());
        let turn = outcome.best_turn.expect("start position has moves");
        assert_eq!(turn.len(), 1, "no captures are possible from the start");
        assert!(legal_moves(&board, mover).contains(&turn[0]));
        assert!(outcome.nodes > 1);
    }
}

#[test]
fn test_prefers_winning_capture() {
    let board = Board::from_layout(
        "........\n........\n.b......\n..w.....\n........\n........\n........\n........",
    )
    .unwrap();
    let outcome = pick_best_turn(&board, Color::Black, &SearchConfig::default());
    assert_eq!(outcome.best_turn, Some(vec![Move::new(2, 1, 4, 3)]));
    assert_eq!(outcome.score, 1);
}

#[test]
fn test_search_is_deterministic() {
    let board = Board::from_layout(
        ".b.b.b.b\nb.b.b...\n.b...b.b\n..b.....\n.w.w....\n..w...w.\n.w.w.w.w\nw.w.w...",
    )
    .unwrap();
    let cfg = SearchConfig::default();
    let first = pick_best_turn(&board, Color::Black, &cfg);
    let second = pick_best_turn(&board, Color::Black, &cfg);
    assert_eq!(first.best_turn, second.best_turn);
    assert_eq!(first.score, second.score);
    assert_eq!(first.nodes, second.nodes);
}

#[test]
fn test_chosen_chain_replays_on_live_board() {
    // Black on 2,3 captures 3,4 and lands on 4,5 facing a fork.
    let board = Board::from_layout(
        "........\n........\n...b....\n....w...\n........\n....w.w.\n........\n........",
    )
    .unwrap();
    let outcome = pick_best_turn(&board, Color::Black, &config(2, PruningMode::ParentBound));
    let turn = outcome.best_turn.expect("black has a capture");
    assert_eq!(turn[0], Move::new(2, 3, 4, 5));
    assert_eq!(turn.len(), 2);

    let after = replay(&board, Color::Black, &turn);
    assert!(!is_game_over(&after));
    assert_eq!(after.pieces_of(Color::White).len(), 1);
}

#[test]
fn test_side_without_pieces_gets_no_turn() {
    let board = Board::from_layout(
        "........\n........\n........\n........\n........\n........\n........\nb.......",
    )
    .unwrap();
    // White has nothing left to move; the root is terminal.
    let outcome = pick_best_turn(&board, Color::White, &SearchConfig::default());
    assert!(outcome.best_turn.is_none());
    assert_eq!(outcome.nodes, 1);
    assert_eq!(outcome.score, -1);
}

#[test]
fn test_no_moves_means_no_turn() {
    // Black's only man is wedged against White's back row.
    let blocked = Board::from_layout(
        "........\n........\n........\n........\n........\n........\n.b......\nw.w.....",
    )
    .unwrap();
    let outcome = pick_best_turn(&blocked, Color::Black, &SearchConfig::default());
    assert!(outcome.best_turn.is_none());
    assert_eq!(outcome.score, MIN_SCORE);
}

#[test]
fn test_depth_zero_only_evaluates() {
    let board = Board::new();
    let outcome = pick_best_turn(&board, Color::Black, &config(0, PruningMode::ParentBound));
    assert!(outcome.best_turn.is_none());
    assert_eq!(outcome.nodes, 1);
    assert_eq!(outcome.score, 0);
}

#[test]
fn test_pruning_modes_agree_on_forced_win() {
    let board = Board::from_layout(
        "........\n........\n.b......\n..w.....\n........\n........\n........\n........",
    )
    .unwrap();
    let parent = pick_best_turn(&board, Color::Black, &config(3, PruningMode::ParentBound));
    let canonical = pick_best_turn(&board, Color::Black, &config(3, PruningMode::Canonical));
    assert_eq!(parent.best_turn, canonical.best_turn);
    assert_eq!(parent.score, canonical.score);
}

#[test]
fn test_lost_position_still_answers() {
    // White's only man must step next to black's pair and be captured.
    let board = Board::from_layout(
        "........\n........\n.b.b....\n........\n...w....\n........\n........\n........",
    )
    .unwrap();
    let outcome = pick_best_turn(&board, Color::White, &SearchConfig::default());
    let turn = outcome.best_turn.expect("white still has a legal move");
    assert!(legal_moves(&board, Color::White).contains(&turn[0]));
}
