//! Move selection.
//!
//! A [`MoveStrategy`] picks a move for the side to move. The provided
//! strategy is [`MiniMax`], a fixed-depth full-width search scored by an
//! [`Evaluator`](super::Evaluator).

mod minimax;
mod params;

use super::{Board, Move};

pub use minimax::MiniMax;
pub use params::SearchParams;

/// Something that chooses a move for the current player.
pub trait MoveStrategy {
    /// `None` when the side to move has no playable move.
    fn execute(&self, board: &Board) -> Option<Move>;
}

/// Counters collected during one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited below the root
    pub nodes: u64,
    pub elapsed_ms: u128,
}

/// Result of a search
#[derive(Clone, Debug)]
pub struct SearchResult {
    /// The chosen move, if any root move could be played
    pub best_move: Option<Move>,
    /// Minimax value of `best_move`, from White's point of view
    pub score: Option<i32>,
    pub stats: SearchStats,
}
