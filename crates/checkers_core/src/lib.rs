pub mod board;
pub mod errors;
pub mod geometry;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod piece;
pub mod turn;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use errors::*;
pub use movegen::*;
pub use notation::*;
pub use perft::perft;
pub use piece::*;
pub use turn::*;
pub use types::*;

// =============================================================================
// Engine trait: implemented by every move selector
// =============================================================================

/// Search limits handed to an engine. Search is depth-bounded only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum search depth in plies (complete turns)
    pub depth: u8,
}

impl SearchLimits {
    pub fn depth(depth: u8) -> Self {
        Self { depth }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(4)
    }
}

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best full turn found, in the order its moves must be applied
    /// (None if the side to move has no legal move or the game is over)
    pub best_turn: Option<Vec<Move>>,
    /// Material score from the mover's perspective
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes searched (for stats)
    pub nodes: u64,
}

/// Trait that all checkers engines implement.
///
/// The caller applies each move of `best_turn` to its live board in order.
pub trait Engine: Send {
    /// Search the position for `mover` with the given search limits.
    fn search(&mut self, board: &Board, mover: Color, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's name
    fn name(&self) -> &str;

    /// Returns the engine's author
    fn author(&self) -> &str {
        "checkers-lab"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
