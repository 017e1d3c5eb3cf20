use std::fmt;

use tracing::trace;

use crate::{
    errors::LayoutError,
    geometry::{column_delta, midpoint, row_delta},
    piece::Piece,
    types::*,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_COLUMNS as usize]; BOARD_ROWS as usize],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard setup: black men on the dark squares of rows 0-2, white on rows 5-7.
    pub fn new() -> Self {
        let mut b = Board::empty();
        for row in 0..BOARD_ROWS {
            let color = if row < PIECE_ROWS {
                Color::Black
            } else if row >= BOARD_ROWS - PIECE_ROWS {
                Color::White
            } else {
                continue;
            };
            for col in 0..BOARD_COLUMNS {
                if Square::new(row, col).is_dark() {
                    b.set(Square::new(row, col), Some(Piece::new(row, col, color)));
                }
            }
        }
        b
    }

    pub fn empty() -> Self {
        Board {
            squares: [[None; BOARD_COLUMNS as usize]; BOARD_ROWS as usize],
        }
    }

    /// Parse a diagram of eight rows, row 0 first.
    ///
    /// Cells are `.` (or `-`) for empty, `b`/`w` for men and `B`/`W` for kings.
    /// Whitespace is ignored, except that rows written with `|` separators
    /// (the `Display` format) treat a blank cell as empty.
    pub fn from_layout(layout: &str) -> Result<Self, LayoutError> {
        let rows: Vec<Vec<char>> = layout
            .lines()
            .map(|line| {
                if line.contains('|') {
                    line.trim()
                        .trim_matches('|')
                        .split('|')
                        .map(|cell| cell.trim().chars().next().unwrap_or('.'))
                        .collect::<Vec<char>>()
                } else {
                    line.chars().filter(|c| !c.is_whitespace()).collect()
                }
            })
            .filter(|cells| !cells.is_empty())
            .collect();

        if rows.len() != BOARD_ROWS as usize {
            return Err(LayoutError::RowCount(rows.len()));
        }

        let mut board = Board::empty();
        for (row, cells) in rows.iter().enumerate() {
            let row = row as i8;
            if cells.len() != BOARD_COLUMNS as usize {
                return Err(LayoutError::ColumnCount {
                    row,
                    found: cells.len(),
                });
            }
            for (col, &ch) in cells.iter().enumerate() {
                let col = col as i8;
                let (color, king) = match ch {
                    '.' | '-' => continue,
                    'b' => (Color::Black, false),
                    'B' => (Color::Black, true),
                    'w' => (Color::White, false),
                    'W' => (Color::White, true),
                    _ => return Err(LayoutError::UnknownCell { ch, row, col }),
                };
                board.place(Square::new(row, col), color, king)?;
            }
        }
        Ok(board)
    }

    /// Put a piece on a dark, on-board square, replacing whatever stood there.
    pub fn place(&mut self, sq: Square, color: Color, king: bool) -> Result<(), LayoutError> {
        if !sq.in_bounds() {
            return Err(LayoutError::OffBoard(sq));
        }
        if !sq.is_dark() {
            return Err(LayoutError::LightSquare(sq));
        }
        let piece = if king {
            Piece::king(sq.row, sq.col, color)
        } else {
            Piece::new(sq.row, sq.col, color)
        };
        self.set(sq, Some(piece));
        Ok(())
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        if sq.in_bounds() {
            self.squares[sq.row as usize][sq.col as usize]
        } else {
            None
        }
    }

    fn set(&mut self, sq: Square, piece: Option<Piece>) {
        if sq.in_bounds() {
            self.squares[sq.row as usize][sq.col as usize] = piece;
        }
    }

    fn take(&mut self, sq: Square) -> Option<Piece> {
        if sq.in_bounds() {
            self.squares[sq.row as usize][sq.col as usize].take()
        } else {
            None
        }
    }

    /// Pieces of one color in row-major order.
    pub fn pieces_of(&self, color: Color) -> Vec<Piece> {
        self.squares
            .iter()
            .flatten()
            .flatten()
            .filter(|p| p.color() == color)
            .copied()
            .collect()
    }

    /// (men, kings) currently on the board for `color`.
    pub fn material(&self, color: Color) -> (u32, u32) {
        self.pieces_of(color)
            .iter()
            .fold((0, 0), |(men, kings), p| {
                if p.is_king() {
                    (men, kings + 1)
                } else {
                    (men + 1, kings)
                }
            })
    }

    pub fn is_legal_move(&self, mv: Move, mover: Color) -> bool {
        let (from, to) = (mv.from(), mv.to());
        if !from.in_bounds() || !to.in_bounds() || !to.is_dark() {
            return false;
        }

        let piece = match self.piece_at(from) {
            Some(p) => p,
            None => return false,
        };
        if piece.color() != mover || self.piece_at(to).is_some() {
            return false;
        }

        let dr = row_delta(from.row, to.row);
        let dc = column_delta(from.col, to.col);
        let distance = dr.abs();
        if !(distance == 1 || distance == 2) || dc.abs() != distance {
            return false;
        }

        // Men only advance toward their crowning row; rows never wrap.
        if !piece.is_king() && dr.signum() != piece.color().forward() {
            return false;
        }

        distance == 1 || self.is_valid_jump(from, to, piece.color())
    }

    fn is_valid_jump(&self, from: Square, to: Square, color: Color) -> bool {
        let mid = midpoint(from, to);
        if !mid.in_bounds() {
            return false;
        }
        match self.piece_at(mid) {
            Some(captured) if captured.color() != color => {}
            _ => return false,
        }

        // Both halves of the jump must be the same diagonal step.
        let first = (mid.row - from.row, column_delta(from.col, mid.col));
        let second = (to.row - mid.row, column_delta(mid.col, to.col));
        first == second && first.0.abs() == 1 && first.1.abs() == 1
    }

    /// Apply one elementary move for `mover`.
    ///
    /// After a jump, a single further jump is played automatically; the
    /// moment the capturing piece has more than one, the choice is handed
    /// back as [`MoveOutcome::ChainPending`]. An illegal move leaves the
    /// board untouched.
    pub fn apply_move(&mut self, mv: Move, mover: Color) -> MoveOutcome {
        if !self.is_legal_move(mv, mover) {
            return MoveOutcome::Illegal;
        }

        let (from, to) = (mv.from(), mv.to());
        let mut piece = match self.take(from) {
            Some(p) => p,
            None => return MoveOutcome::Illegal,
        };
        piece.relocate(to);
        if piece.promote_if_eligible() {
            trace!(square = %to, color = %piece.color(), "piece crowned");
        }
        self.set(to, Some(piece));

        if row_delta(from.row, to.row).abs() == 1 {
            return MoveOutcome::Completed;
        }

        self.set(midpoint(from, to), None);

        let further = piece.available_jumps(self, mover);
        match further.as_slice() {
            [] => MoveOutcome::Completed,
            [next] => {
                trace!(from = %to, to = %next, "continuing forced jump");
                self.apply_move(Move::between(to, *next), mover)
            }
            _ => MoveOutcome::ChainPending { at: to },
        }
    }

    /// Jump landings available to the `mover` piece on `at`; empty if the
    /// square is empty or holds an opposing piece.
    pub fn legal_continuations(&self, at: Square, mover: Color) -> Vec<Square> {
        match self.piece_at(at) {
            Some(p) if p.color() == mover => p.available_jumps(self, mover),
            _ => Vec::new(),
        }
    }

    /// True once either side has no pieces left.
    pub fn is_game_over(&self) -> bool {
        self.pieces_of(Color::Black).is_empty() || self.pieces_of(Color::White).is_empty()
    }

    /// Status with `to_move` on turn: a side without pieces, or without a
    /// legal move on its own turn, has lost.
    pub fn status(&self, to_move: Color) -> GameStatus {
        for color in [Color::Black, Color::White] {
            if self.pieces_of(color).is_empty() {
                return GameStatus::Won(color.other());
            }
        }
        let stuck = self
            .pieces_of(to_move)
            .iter()
            .all(|p| !p.has_any_move(self, to_move));
        if stuck {
            GameStatus::Won(to_move.other())
        } else {
            GameStatus::Ongoing
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.squares {
            for cell in row {
                let ch = cell.map(|p| p.display_char()).unwrap_or(' ');
                write!(f, "|{ch}")?;
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
