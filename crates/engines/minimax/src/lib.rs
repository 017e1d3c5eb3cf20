//! Minimax Checkers Engine
//!
//! Depth-limited minimax with alpha-beta pruning and material evaluation.
//! Capture chains with more than one continuation are expanded into one
//! child per complete chain, all at the same ply.

mod eval;
mod search;
mod state;

use checkers_core::{Board, Color, Engine, Move, SearchLimits, SearchResult};
use serde::{Deserialize, Serialize};
use tracing::info;

pub use eval::{evaluate, KING_VALUE, MAN_VALUE};
pub use search::{pick_best_turn, SearchOutcome};
pub use state::{GameState, MAX_SCORE, MIN_SCORE};

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u8 = 4;

/// How a node decides it can stop exploring children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PruningMode {
    /// Every node starts unbounded and compares its own updated bound with
    /// its parent's opposite bound.
    #[default]
    ParentBound,
    /// Children inherit the parent's alpha/beta window and cut off when
    /// their own alpha reaches their own beta.
    Canonical,
}

/// Search configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum search depth in plies
    pub max_depth: u8,
    pub pruning: PruningMode,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_DEPTH,
            pruning: PruningMode::default(),
        }
    }
}

/// Best complete turn for `mover` at the default depth.
///
/// The caller applies the returned moves to its board in order. `None`
/// only when `mover` has no legal move or the game is already over.
pub fn choose_move(board: &Board, mover: Color) -> Option<Vec<Move>> {
    pick_best_turn(board, mover, &SearchConfig::default()).best_turn
}

/// Checkers engine using minimax with alpha-beta pruning.
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    config: SearchConfig,
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self { config, nodes: 0 }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, board: &Board, mover: Color, limits: SearchLimits) -> SearchResult {
        let config = SearchConfig {
            max_depth: limits.depth,
            ..self.config.clone()
        };
        let outcome = pick_best_turn(board, mover, &config);
        self.nodes = outcome.nodes;

        if let Some(turn) = &outcome.best_turn {
            info!(
                color = %mover,
                turn = %checkers_core::format_turn(turn),
                score = outcome.score,
                nodes = outcome.nodes,
                "minimax chose turn"
            );
        }

        SearchResult {
            best_turn: outcome.best_turn,
            score: outcome.score,
            depth: limits.depth,
            nodes: outcome.nodes,
        }
    }

    fn name(&self) -> &str {
        match self.config.pruning {
            PruningMode::ParentBound => "Minimax v1.0",
            PruningMode::Canonical => "Minimax v1.0 (canonical)",
        }
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
