//! Text form of moves: four digits, start row, start column, end row, end column.

use crate::{errors::NotationError, types::Move};

const SEPARATORS: &[char] = &[',', '-', '>', '(', ')', ':'];

pub fn format_move(mv: Move) -> String {
    format!(
        "{}{}{}{}",
        mv.start_row, mv.start_col, mv.end_row, mv.end_col
    )
}

pub fn format_turn(moves: &[Move]) -> String {
    moves
        .iter()
        .map(|&mv| format_move(mv))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse `2130`, `21 30` or `2,1 -> 3,0` into a move.
///
/// Only the shape is checked here; whether the squares are on the board
/// and the move is legal is the board's call.
pub fn parse_move(txt: &str) -> Result<Move, NotationError> {
    let txt = txt.trim();
    if txt.is_empty() {
        return Err(NotationError::Empty);
    }

    let mut digits = Vec::with_capacity(4);
    for ch in txt.chars() {
        if let Some(d) = ch.to_digit(10) {
            digits.push(d as i8);
        } else if !ch.is_whitespace() && !SEPARATORS.contains(&ch) {
            return Err(NotationError::BadCharacter(ch));
        }
    }

    match digits.as_slice() {
        &[sr, sc, er, ec] => Ok(Move::new(sr, sc, er, ec)),
        other => Err(NotationError::WrongLength(other.len())),
    }
}
