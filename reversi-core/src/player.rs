//! Player abstraction

use crate::board::{Board, Color, Move};
use crate::search;

/// Something that can pick a move. Returns `None` when `color` has no
/// legal move (a pass); the turn loop re-validates whatever comes back
/// through the rule engine.
pub trait Player {
    fn produce_move(&mut self, board: &Board, color: Color) -> Option<Move>;
}

/// Search-driven player
pub struct AlphaBetaPlayer {
    pub depth: u32,
}

impl AlphaBetaPlayer {
    pub fn new(depth: u32) -> Self {
        Self { depth }
    }
}

impl Player for AlphaBetaPlayer {
    fn produce_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        search::best_move(board, color, self.depth)
    }
}
