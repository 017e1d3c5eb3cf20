//! Game context threaded through every turn loop.

use checkers_core::{Board, Color, Engine, GameStatus, Move, MoveOutcome, SearchLimits};
use tracing::debug;

use crate::errors::GameError;

/// Board, side to move and turn counter of one game.
///
/// A turn number covers one move by each side; Black always moves first.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Color,
    turn: u32,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::with_board(Board::new(), Color::Black)
    }

    pub fn with_board(board: Board, to_move: Color) -> Self {
        Self {
            board,
            to_move,
            turn: 1,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.board.status(self.to_move)
    }

    /// Apply one elementary move for the side to move.
    pub fn apply_move(&mut self, mv: Move) -> MoveOutcome {
        let outcome = self.board.apply_move(mv, self.to_move);
        debug!(turn = self.turn, color = %self.to_move, %mv, ?outcome, "move applied");
        outcome
    }

    /// Apply a complete turn produced by an engine, in order.
    ///
    /// The turn is applied to a scratch board first; the live board only
    /// changes when every step was legal.
    pub fn apply_engine_turn(&mut self, moves: &[Move]) -> Result<(), GameError> {
        let mut board = self.board.clone();
        for &mv in moves {
            if board.apply_move(mv, self.to_move) == MoveOutcome::Illegal {
                return Err(GameError::IllegalEngineMove { mv, turn: self.turn });
            }
        }
        self.board = board;
        Ok(())
    }

    /// Ask `engine` for a turn and play it. `Ok(None)` when it has nothing to play.
    pub fn play_engine_turn(
        &mut self,
        engine: &mut dyn Engine,
        limits: SearchLimits,
    ) -> Result<Option<Vec<Move>>, GameError> {
        let result = engine.search(&self.board, self.to_move, limits);
        match result.best_turn {
            Some(moves) => {
                self.apply_engine_turn(&moves)?;
                Ok(Some(moves))
            }
            None => Ok(None),
        }
    }

    /// Hand the move to the other side; the counter advances once both have moved.
    pub fn end_turn(&mut self) {
        self.to_move = self.to_move.other();
        if self.to_move == Color::Black {
            self.turn += 1;
        }
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
