//! Depth-limited minimax with alpha-beta pruning over complete turns.
//!
//! Move expansion (one elementary move into every way its capture chain can
//! finish) lives in `checkers_core::expand_move`; this module only recurses
//! over the resulting children.

use checkers_core::{expand_move, format_turn, legal_moves, Board, Color, Move};
use tracing::debug;

use crate::{
    state::{GameState, MIN_SCORE},
    PruningMode, SearchConfig,
};

/// Result of [`pick_best_turn`].
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Best complete turn found (None if the mover has no legal move or the game is over)
    pub best_turn: Option<Vec<Move>>,
    /// Score of the root for the mover
    pub score: i32,
    /// Nodes visited
    pub nodes: u64,
}

/// Searches `board` for `mover` and returns the best complete turn.
///
/// Ties go to the first turn seen, so the result is deterministic for a
/// given board, side and configuration.
pub fn pick_best_turn(board: &Board, mover: Color, config: &SearchConfig) -> SearchOutcome {
    let mut searcher = Searcher {
        config,
        nodes: 0,
        best_turn: None,
    };
    let mut root = GameState::root(board, mover);
    let score = searcher.search(&mut root, 0);

    SearchOutcome {
        best_turn: searcher.best_turn,
        score,
        nodes: searcher.nodes,
    }
}

struct Searcher<'c> {
    config: &'c SearchConfig,
    nodes: u64,
    best_turn: Option<Vec<Move>>,
}

impl Searcher<'_> {
    fn search(&mut self, node: &mut GameState<'_>, depth: u8) -> i32 {
        self.nodes += 1;

        if depth >= self.config.max_depth || node.is_terminal() {
            return node.evaluate();
        }

        let mover = node.current_player();
        let inherit = self.config.pruning == PruningMode::Canonical;
        let mut best_score = MIN_SCORE;

        for mv in legal_moves(node.board(), mover) {
            for turn in expand_move(node.board(), mover, mv) {
                let (score, moves) = {
                    let mut child = GameState::child(&*node, turn, inherit);
                    let score = self.search(&mut child, depth + 1);
                    (score, child.into_moves())
                };

                if depth == 0 {
                    debug!(turn = %format_turn(&moves), score, "root candidate");
                }
                if score > best_score {
                    best_score = score;
                    if depth == 0 {
                        self.best_turn = Some(moves);
                    }
                } else if depth == 0 && self.best_turn.is_none() {
                    // Every line loses outright; still answer with a legal turn.
                    self.best_turn = Some(moves);
                }

                if node.is_max_node() {
                    node.raise_alpha(score);
                    if self.should_prune(node) {
                        return node.set_score(node.alpha());
                    }
                } else {
                    node.lower_beta(score);
                    if self.should_prune(node) {
                        return node.set_score(node.beta());
                    }
                }
            }
        }

        let score = if node.is_max_node() {
            node.alpha()
        } else {
            node.beta()
        };
        node.set_score(score)
    }

    fn should_prune(&self, node: &GameState<'_>) -> bool {
        match self.config.pruning {
            // A node's own bound against its parent's opposite bound.
            PruningMode::ParentBound => match node.parent() {
                None => false,
                Some(parent) if node.is_max_node() => parent.beta() <= node.alpha(),
                Some(parent) => parent.alpha() >= node.beta(),
            },
            PruningMode::Canonical => node.alpha() >= node.beta(),
        }
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
