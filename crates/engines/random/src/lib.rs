//! Random Move Checkers Engine
//!
//! Picks uniformly among all complete turns available to the side to move.
//! Useful for:
//! - Smoke-testing the match runner and the turn loop
//! - Baseline comparisons (minimax should beat this comfortably)
//! - Stress testing chain expansion

use checkers_core::{legal_turns, Board, Color, Engine, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, SeedableRng};


/// A checkers engine that plays random legal turns.
///
/// A capture chain with several endings counts as several turns, so each
/// way of finishing it is equally likely.
#[derive(Debug, Clone, Default)]
pub struct RandomEngine {
    rng: Option<StdRng>,
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reproducible engine: the same seed replays the same choices.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Some(StdRng::seed_from_u64(seed)),
            nodes: 0,
        }
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &Board, mover: Color, _limits: SearchLimits) -> SearchResult {
        let turns = legal_turns(board, mover);
        self.nodes = turns.len() as u64;

        let chosen = match &mut self.rng {
            Some(rng) => turns.choose(rng),
            None => turns.choose(&mut thread_rng()),
        };

        SearchResult {
            best_turn: chosen.map(|t| t.moves.clone()),
            score: 0,
            depth: 1,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
