use super::*;
use crate::types::Square;

fn fork_board() -> Board {
    Board::from_layout(
        "........\n\
         ........\n\
         ...b....\n\
         ....w...\n\
         ........\n\
         ....w.w.\n\
         ........\n\
         ..w.....",
    )
    .unwrap()
}

#[test]
fn test_simple_move_is_one_turn() {
    let b = Board::new();
    let turns = expand_move(&b, Color::Black, Move::new(2, 1, 3, 0));
    assert_eq!(turns.len(), 1);
    assert_eq!(turns[0].moves, vec![Move::new(2, 1, 3, 0)]);
    assert!(turns[0].board.piece_at(Square::new(3, 0)).is_some());
    // Input board is untouched.
    assert_eq!(b, Board::new());
}

#[test]
fn test_illegal_move_has_no_turns() {
    let b = Board::new();
    assert!(expand_move(&b, Color::Black, Move::new(2, 1, 4, 3)).is_empty());
}

#[test]
fn test_ambiguous_chain_fans_out() {
    let b = fork_board();
    let first = Move::new(2, 3, 4, 5);
    let turns = expand_move(&b, Color::Black, first);
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0].moves, vec![first, Move::new(4, 5, 6, 3)]);
    assert_eq!(turns[1].moves, vec![first, Move::new(4, 5, 6, 7)]);

    for turn in &turns {
        // Two captures each, one white man left standing on row 5 plus the one on row 7.
        assert_eq!(turn.board.pieces_of(Color::White).len(), 2);
    }

    // Every chain replays on a live board: pending until the last step.
    for turn in &turns {
        let mut live = b.clone();
        let (last, prefix) = turn.moves.split_last().unwrap();
        for mv in prefix {
            assert!(matches!(
                live.apply_move(*mv, Color::Black),
                MoveOutcome::ChainPending { .. }
            ));
        }
        assert_eq!(live.apply_move(*last, Color::Black), MoveOutcome::Completed);
        assert_eq!(live, turn.board);
    }
}

#[test]
fn test_legal_turns_counts_chain_branches() {
    let b = fork_board();
    let turns = legal_turns(&b, Color::Black);
    // The lone black man: two chain endings from its jump plus one simple move.
    assert_eq!(turns.len(), 3);
    assert_eq!(turns[2].moves, vec![Move::new(2, 3, 3, 2)]);
}
