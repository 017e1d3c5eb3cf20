use crate::{
    board::Board,
    geometry::wrap_column,
    types::{Color, Move, Square},
};

/// A man or king standing on a dark square.
///
/// The `king` flag is monotonic: it is raised once by [`Piece::promote_if_eligible`]
/// and never cleared, whatever happens to the piece afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    row: i8,
    col: i8,
    color: Color,
    king: bool,
}

impl Piece {
    pub fn new(row: i8, col: i8, color: Color) -> Self {
        Self {
            row,
            col,
            color,
            king: false,
        }
    }

    pub fn king(row: i8, col: i8, color: Color) -> Self {
        Self {
            king: true,
            ..Self::new(row, col, color)
        }
    }

    pub fn row(&self) -> i8 {
        self.row
    }

    pub fn col(&self) -> i8 {
        self.col
    }

    pub fn square(&self) -> Square {
        Square::new(self.row, self.col)
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_king(&self) -> bool {
        self.king
    }

    /// Update the stored coordinates. Promotion is a separate step.
    pub(crate) fn relocate(&mut self, to: Square) {
        self.row = to.row;
        self.col = to.col;
    }

    /// Crown the piece if it stands on its far edge. Returns true on the
    /// move that crowns it.
    pub(crate) fn promote_if_eligible(&mut self) -> bool {
        if !self.king && self.row == self.color.king_row() {
            self.king = true;
            return true;
        }
        false
    }

    pub fn display_char(&self) -> char {
        match (self.color, self.king) {
            (Color::Black, false) => 'b',
            (Color::Black, true) => 'B',
            (Color::White, false) => 'w',
            (Color::White, true) => 'W',
        }
    }

    /// One-step destinations this piece may legally reach.
    pub fn available_simple_moves(&self, board: &Board, mover: Color) -> Vec<Square> {
        self.available_destinations(board, mover, 1)
    }

    /// Jump landings this piece may legally reach.
    pub fn available_jumps(&self, board: &Board, mover: Color) -> Vec<Square> {
        self.available_destinations(board, mover, 2)
    }

    /// Jumps first, then simple moves.
    pub fn available_moves_and_jumps(&self, board: &Board, mover: Color) -> Vec<Square> {
        let mut out = self.available_jumps(board, mover);
        out.extend(self.available_simple_moves(board, mover));
        out
    }

    pub fn has_any_move(&self, board: &Board, mover: Color) -> bool {
        !self.available_moves_and_jumps(board, mover).is_empty()
    }

    // Kings get the same offsets as men; the direction check in
    // `Board::is_legal_move` is what tells them apart.
    fn available_destinations(&self, board: &Board, mover: Color, distance: i8) -> Vec<Square> {
        let from = self.square();
        let mut out = Vec::with_capacity(4);

        for dr in [-distance, distance] {
            for dc in [-distance, distance] {
                let to = Square::new(self.row + dr, self.col + dc);
                if board.is_legal_move(Move::between(from, to), mover) {
                    out.push(to);
                }
            }
        }

        // Destinations around the 0/7 seam.
        for dr in [-distance, distance] {
            for dc in [-distance, distance] {
                if let Some(col) = wrap_column(self.col, dc) {
                    let to = Square::new(self.row + dr, col);
                    if board.is_legal_move(Move::between(from, to), mover) {
                        out.push(to);
                    }
                }
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "piece_tests.rs"]
mod piece_tests;
