use checkers_core::{Board, Color};

/// Value of a man in the material count.
pub const MAN_VALUE: i32 = 1;
/// Value of a king in the material count.
pub const KING_VALUE: i32 = 2;

/// Material balance seen from `perspective`.
///
/// Black's score is its men and kings minus white's; white's is the negation.
pub fn evaluate(board: &Board, perspective: Color) -> i32 {
    let side = |color| {
        let (men, kings) = board.material(color);
        men as i32 * MAN_VALUE + kings as i32 * KING_VALUE
    };
    let black = side(Color::Black) - side(Color::White);
    match perspective {
        Color::Black => black,
        Color::White => -black,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position_is_level() {
        let b = Board::new();
        assert_eq!(evaluate(&b, Color::Black), 0);
        assert_eq!(evaluate(&b, Color::White), 0);
    }

    #[test]
    fn test_kings_count_double() {
        let b = Board::from_layout(
            ".B.b....\n........\n........\n........\n........\n........\n........\nw.......",
        )
        .unwrap();
        assert_eq!(evaluate(&b, Color::Black), 2);
        assert_eq!(evaluate(&b, Color::White), -2);
    }
}
