use thiserror::Error;

use crate::types::Square;

/// Problems found while building a board from a text diagram.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("expected 8 rows, found {0}")]
    RowCount(usize),
    #[error("row {row}: expected 8 cells, found {found}")]
    ColumnCount { row: i8, found: usize },
    #[error("unknown cell {ch:?} at {row},{col}")]
    UnknownCell { ch: char, row: i8, col: i8 },
    #[error("square {0} is not playable (light square)")]
    LightSquare(Square),
    #[error("square {0} is off the board")]
    OffBoard(Square),
}

/// Problems found while reading a move typed as text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("empty move")]
    Empty,
    #[error("expected 4 coordinates, found {0}")]
    WrongLength(usize),
    #[error("unexpected character {0:?}")]
    BadCharacter(char),
}
