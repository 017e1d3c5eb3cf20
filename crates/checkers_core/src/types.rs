use std::fmt;

use serde::{Deserialize, Serialize};

pub const BOARD_ROWS: i8 = 8;
pub const BOARD_COLUMNS: i8 = 8;
/// Rows filled with men for each side at game start.
pub const PIECE_ROWS: i8 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Row on which a man of this color is crowned.
    pub fn king_row(self) -> i8 {
        match self {
            Color::Black => BOARD_ROWS - 1,
            Color::White => 0,
        }
    }

    /// Sign of the row step a man of this color is allowed to take.
    pub fn forward(self) -> i8 {
        match self {
            Color::Black => 1,
            Color::White => -1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::White => "White",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    pub fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(self) -> bool {
        (0..BOARD_ROWS).contains(&self.row) && (0..BOARD_COLUMNS).contains(&self.col)
    }

    /// Only dark squares ((row + col) odd) ever hold pieces.
    pub fn is_dark(self) -> bool {
        (self.row + self.col).rem_euclid(2) == 1
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// An elementary move: one step or one jump of a single piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub start_row: i8,
    pub start_col: i8,
    pub end_row: i8,
    pub end_col: i8,
}

impl Move {
    pub fn new(start_row: i8, start_col: i8, end_row: i8, end_col: i8) -> Self {
        Self {
            start_row,
            start_col,
            end_row,
            end_col,
        }
    }

    pub fn between(from: Square, to: Square) -> Self {
        Self::new(from.row, from.col, to.row, to.col)
    }

    pub fn from(self) -> Square {
        Square::new(self.start_row, self.start_col)
    }

    pub fn to(self) -> Square {
        Square::new(self.end_row, self.end_col)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from(), self.to())
    }
}

/// Result of applying a move to a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move broke a rule; the board was left untouched.
    Illegal,
    /// The turn is over, including any unambiguous chain continuation.
    Completed,
    /// The capturing piece, standing on `at`, has more than one further jump.
    ChainPending { at: Square },
}

/// Game status as seen by the side about to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Won(Color),
}
