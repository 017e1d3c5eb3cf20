//! Match runner for playing games between engines

use checkers_core::{Color, Engine, GameStatus};
use minimax_engine::MinimaxEngine;
use tracing::{info, warn};

use crate::{config::MatchConfig, game::Game};

/// Result of a single game from the first engine's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }

    fn for_side(winner: Color, side: Color) -> Self {
        if winner == side {
            GameResult::Win
        } else {
            GameResult::Loss
        }
    }
}

/// Aggregate result of a match
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }

    fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            // Alternate colors if configured
            let engine1_black = !self.config.alternate_colors || game_num % 2 == 0;

            let game_result = if engine1_black {
                self.play_game(engine1, engine2)
            } else {
                self.play_game(engine2, engine1).flipped()
            };
            result.record(game_result);

            info!(
                game = game_num + 1,
                engine1 = engine1.name(),
                engine2 = engine2.name(),
                ?game_result,
                "game finished"
            );

            if self.config.verbose {
                let color = if engine1_black { "B" } else { "W" };
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    color,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        result
    }

    /// Play a single game, returns result from black's perspective
    pub fn play_game(&self, black: &mut dyn Engine, white: &mut dyn Engine) -> GameResult {
        let mut game = Game::new();
        black.new_game();
        white.new_game();
        let limits = self.config.search_limits();

        while game.turn() <= self.config.max_turns {
            if let GameStatus::Won(winner) = game.status() {
                return GameResult::for_side(winner, Color::Black);
            }

            let mover = game.to_move();
            let engine: &mut dyn Engine = match mover {
                Color::Black => &mut *black,
                Color::White => &mut *white,
            };
            match game.play_engine_turn(engine, limits) {
                Ok(Some(_)) => {}
                Ok(None) => {
                    warn!(color = %mover, turn = game.turn(), "engine returned no turn; forfeit");
                    return GameResult::for_side(mover.other(), Color::Black);
                }
                Err(e) => {
                    warn!(color = %mover, error = %e, "illegal engine turn; forfeit");
                    return GameResult::for_side(mover.other(), Color::Black);
                }
            }
            game.end_turn();
        }

        // Turn limit reached
        GameResult::Draw
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    depth: u8,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        depth,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2)
}

/// Minimax engine configured from a match's depth and pruning rule.
pub fn minimax_for(config: &MatchConfig) -> MinimaxEngine {
    MinimaxEngine::with_config(config.search_config())
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
