//! Cylindrical board geometry.
//!
//! Columns 0 and 7 are neighbours: a column distance larger than a jump is
//! read the short way around the cylinder. Rows never wrap.

use crate::types::{Square, BOARD_COLUMNS};

/// Signed column step from `start` to `end`, taking the short way around.
///
/// Raw differences whose magnitude exceeds 2 are reinterpreted as a
/// wrap-around distance, so `0 -> 7` is a step of -1 and `6 -> 0` a step of +2.
pub fn column_delta(start: i8, end: i8) -> i8 {
    let raw = end - start;
    if raw.abs() > 2 {
        raw - BOARD_COLUMNS * raw.signum()
    } else {
        raw
    }
}

pub fn row_delta(start: i8, end: i8) -> i8 {
    end - start
}

/// True when travelling from `start` to `end` crosses the 0/7 seam.
pub fn crosses_seam(start: i8, end: i8) -> bool {
    (end - start).abs() > 2
}

/// Column of the square jumped over when moving two columns from `start` to `end`.
///
/// Across the seam this is the immediate wrap neighbour of `start`, not the
/// arithmetic mean of the two columns.
pub fn midpoint_col(start: i8, end: i8) -> i8 {
    if crosses_seam(start, end) {
        (start + column_delta(start, end).signum()).rem_euclid(BOARD_COLUMNS)
    } else {
        (start + end) / 2
    }
}

pub fn midpoint(from: Square, to: Square) -> Square {
    Square::new((from.row + to.row) / 2, midpoint_col(from.col, to.col))
}

/// Destination column reached by stepping `step` columns from `col` across the seam.
///
/// Returns `None` when the step stays on the board without wrapping; those
/// destinations are covered by ordinary offsets.
pub fn wrap_column(col: i8, step: i8) -> Option<i8> {
    let target = col + step;
    if (0..BOARD_COLUMNS).contains(&target) {
        None
    } else {
        Some(target.rem_euclid(BOARD_COLUMNS))
    }
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod geometry_tests;
