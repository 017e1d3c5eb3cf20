//! Expansion of elementary moves into complete turns.
//!
//! A jump that leaves the capturing piece with several further jumps fans
//! out into one turn per way the chain can be finished.

use crate::{
    board::Board,
    movegen::legal_moves,
    types::{Color, Move, MoveOutcome},
};

/// A complete turn: the ordered elementary moves and the board they produce.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    pub moves: Vec<Move>,
    pub board: Board,
}

/// All complete turns that start with `mv`. Empty if `mv` is illegal.
///
/// The input board is never touched; every branch works on its own clone.
pub fn expand_move(board: &Board, mover: Color, mv: Move) -> Vec<Turn> {
    let mut out = Vec::new();
    expand_into(board.clone(), mover, Vec::new(), mv, &mut out);
    out
}

fn expand_into(mut board: Board, mover: Color, mut moves: Vec<Move>, mv: Move, out: &mut Vec<Turn>) {
    match board.apply_move(mv, mover) {
        MoveOutcome::Illegal => {}
        MoveOutcome::Completed => {
            moves.push(mv);
            out.push(Turn { moves, board });
        }
        MoveOutcome::ChainPending { at } => {
            moves.push(mv);
            for next in board.legal_continuations(at, mover) {
                expand_into(
                    board.clone(),
                    mover,
                    moves.clone(),
                    Move::between(at, next),
                    out,
                );
            }
        }
    }
}

/// Every complete turn available to `mover`, in move-generation order.
pub fn legal_turns(board: &Board, mover: Color) -> Vec<Turn> {
    legal_moves(board, mover)
        .into_iter()
        .flat_map(|mv| expand_move(board, mover, mv))
        .collect()
}

#[cfg(test)]
#[path = "turn_tests.rs"]
mod turn_tests;
