use crate::{board::Board, turn::legal_turns, types::Color};

/// Pure perft node count over complete turns.
/// Counts every turn sequence from the current position down to `depth`,
/// sides alternating after each full turn (chains count once).
pub fn perft(board: &Board, mover: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let turns = legal_turns(board, mover);
    if depth == 1 {
        return turns.len() as u64;
    }

    turns
        .iter()
        .map(|turn| perft(&turn.board, mover.other(), depth - 1))
        .sum()
}
