//! Turn-count enumeration from fixed positions.
//!
//! Chains count as a single turn, so these numbers also pin down how
//! ambiguous captures fan out.

use checkers_core::{perft, Board, Color};

#[test]
fn perft_start_position_depth_one() {
    let b = Board::new();
    assert_eq!(perft(&b, Color::Black, 1), 8);
    assert_eq!(perft(&b, Color::White, 1), 8);
}

#[test]
fn perft_start_position_depth_two() {
    // No contact between the sides after one move each.
    let b = Board::new();
    assert_eq!(perft(&b, Color::Black, 2), 64);
}

#[test]
fn perft_depth_zero_is_one() {
    assert_eq!(perft(&Board::new(), Color::Black, 0), 1);
}

#[test]
fn perft_counts_each_chain_ending() {
    let b = Board::from_layout(
        "........\n\
         ........\n\
         ...b....\n\
         ....w...\n\
         ........\n\
         ....w.w.\n\
         ........\n\
         ........",
    )
    .unwrap();
    // Two ways to finish the double jump, plus the quiet step to 3,2.
    assert_eq!(perft(&b, Color::Black, 1), 3);
}

#[test]
fn perft_is_stable_across_calls() {
    let b = Board::new();
    let first = perft(&b, Color::Black, 3);
    assert!(first > 64);
    assert_eq!(first, perft(&b, Color::Black, 3));
}
