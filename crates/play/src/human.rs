//! Human move entry over a line-oriented reader and writer.

use std::io::{BufRead, Write};

use checkers_core::{parse_move, Move, MoveOutcome, Square};

use crate::{errors::PlayError, game::Game};

/// Reads moves such as `2130` or `2,1 -> 3,0`, one per line.
///
/// Unreadable or illegal input is reported and asked for again. When a jump
/// leaves a choice of continuations, the player keeps entering jumps from
/// the square the piece stopped on until the turn is complete.
pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Play one complete turn for the side to move in `game`.
    ///
    /// Returns the elementary moves that were entered. The caller ends the
    /// turn.
    pub fn play_turn(&mut self, game: &mut Game) -> Result<Vec<Move>, PlayError> {
        let mut played = Vec::new();
        let mut pending: Option<Square> = None;

        loop {
            let mv = self.prompt(game)?;

            if let Some(at) = pending {
                let continuations = game.board().legal_continuations(at, game.to_move());
                if mv.from() != at || !continuations.contains(&mv.to()) {
                    writeln!(self.output, "Illegal move. Ignored")?;
                    writeln!(self.output, "Continue jumping from {at}")?;
                    continue;
                }
            }

            match game.apply_move(mv) {
                MoveOutcome::Illegal => {
                    writeln!(self.output, "Illegal move. Ignored")?;
                }
                MoveOutcome::Completed => {
                    played.push(mv);
                    self.show(game, mv)?;
                    return Ok(played);
                }
                MoveOutcome::ChainPending { at } => {
                    played.push(mv);
                    self.show(game, mv)?;
                    writeln!(self.output, "Continue jumping from {at}")?;
                    pending = Some(at);
                }
            }
        }
    }

    /// Ask until a line parses as a move.
    fn prompt(&mut self, game: &Game) -> Result<Move, PlayError> {
        loop {
            writeln!(self.output, "Enter your move ({}):", game.to_move())?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(PlayError::InputClosed);
            }
            match parse_move(line.trim()) {
                Ok(mv) => return Ok(mv),
                Err(e) => writeln!(self.output, "Could not read move: {e}")?,
            }
        }
    }

    fn show(&mut self, game: &Game, mv: Move) -> Result<(), PlayError> {
        writeln!(self.output, "Turn {}: {mv}", game.turn())?;
        write!(self.output, "{}", game.board())?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "human_tests.rs"]
mod human_tests;
