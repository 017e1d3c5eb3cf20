use crate::{
    board::Board,
    piece::Piece,
    types::{Color, Move},
};

/// Every elementary move available to `mover`, pieces in row-major order,
/// each piece's jumps before its simple moves.
pub fn legal_moves(board: &Board, mover: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    legal_moves_into(board, mover, &mut out);
    out
}

/// Same as [`legal_moves`], reusing the caller's buffer.
pub fn legal_moves_into(board: &Board, mover: Color, out: &mut Vec<Move>) {
    out.clear();
    for piece in board.pieces_of(mover) {
        let from = piece.square();
        out.extend(
            piece
                .available_moves_and_jumps(board, mover)
                .into_iter()
                .map(|to| Move::between(from, to)),
        );
    }
}

pub fn has_any_move(board: &Board, mover: Color) -> bool {
    board
        .pieces_of(mover)
        .iter()
        .any(|p| p.has_any_move(board, mover))
}

pub fn pieces_of(board: &Board, color: Color) -> Vec<Piece> {
    board.pieces_of(color)
}

pub fn is_game_over(board: &Board) -> bool {
    board.is_game_over()
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
