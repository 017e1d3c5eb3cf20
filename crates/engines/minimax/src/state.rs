//! Search node.

use checkers_core::{Board, Color, Move, Turn};

use crate::eval::evaluate;

/// Lowest score a node can report.
pub const MIN_SCORE: i32 = i32::MIN;
/// Highest score a node can report.
pub const MAX_SCORE: i32 = i32::MAX;

/// A snapshot of the game inside the search tree.
///
/// The node owns its board. The parent link is a plain borrow: a child only
/// lives while its parent is being expanded, and it reads the parent's
/// bounds for the pruning test but never writes them.
#[derive(Debug)]
pub struct GameState<'a> {
    current: Color,
    root: Color,
    board: Board,
    parent: Option<&'a GameState<'a>>,
    alpha: i32,
    beta: i32,
    score: i32,
    moves: Vec<Move>,
}

impl<'a> GameState<'a> {
    /// Search root: `mover` is both the side to move and the side scored for.
    pub fn root(board: &Board, mover: Color) -> Self {
        Self::new(mover, mover, board.clone(), None, Vec::new())
    }

    /// Node reached from `parent` by playing `turn`; the other side moves next.
    ///
    /// Bounds start unbounded unless `inherit_bounds` is set, in which case
    /// the parent's current alpha and beta are copied in.
    pub fn child(parent: &'a GameState<'a>, turn: Turn, inherit_bounds: bool) -> Self {
        let mut state = Self::new(
            parent.current.other(),
            parent.root,
            turn.board,
            Some(parent),
            turn.moves,
        );
        if inherit_bounds {
            state.alpha = parent.alpha;
            state.beta = parent.beta;
        }
        state
    }

    fn new(
        current: Color,
        root: Color,
        board: Board,
        parent: Option<&'a GameState<'a>>,
        moves: Vec<Move>,
    ) -> Self {
        let max_node = current == root;
        Self {
            current,
            root,
            board,
            parent,
            alpha: MIN_SCORE,
            beta: MAX_SCORE,
            score: if max_node { MIN_SCORE } else { MAX_SCORE },
            moves,
        }
    }

    pub fn current_player(&self) -> Color {
        self.current
    }

    pub fn opponent(&self) -> Color {
        self.current.other()
    }

    pub fn root_player(&self) -> Color {
        self.root
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn parent(&self) -> Option<&'a GameState<'a>> {
        self.parent
    }

    /// The complete turn (possibly a capture chain) that produced this node.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn into_moves(self) -> Vec<Move> {
        self.moves
    }

    pub fn alpha(&self) -> i32 {
        self.alpha
    }

    pub fn beta(&self) -> i32 {
        self.beta
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    /// Alpha only ever rises.
    pub fn raise_alpha(&mut self, value: i32) {
        self.alpha = self.alpha.max(value);
    }

    /// Beta only ever falls.
    pub fn lower_beta(&mut self, value: i32) {
        self.beta = self.beta.min(value);
    }

    pub fn set_score(&mut self, score: i32) -> i32 {
        self.score = score;
        score
    }

    /// Maximizing when the side to move is the side being scored for.
    pub fn is_max_node(&self) -> bool {
        self.current == self.root
    }

    /// True once either side has run out of pieces.
    pub fn is_terminal(&self) -> bool {
        self.board.is_game_over()
    }

    /// Static material evaluation for the root player; stored as the node's score.
    pub fn evaluate(&mut self) -> i32 {
        let score = evaluate(&self.board, self.root);
        self.set_score(score)
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
