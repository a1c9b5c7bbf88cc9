//! Chess position representation and game logic.
//!
//! Positions are immutable: making a move produces a new [`Board`]. Supports
//! the full move set including castling, en passant and promotion.
//!
//! # Example
//! ```
//! use board_engine::board::Board;
//!
//! let board = Board::standard();
//! let moves = board.current_player().legal_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod builder;
mod error;
mod eval;
mod execute;
mod fen;
mod movegen;
mod player;
pub mod prelude;
mod search;
mod state;
mod tables;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{BoardError, MoveParseError, SquareError};
pub use execute::find_move;
pub use player::{MoveStatus, MoveTransition, Player};
pub use state::Board;
pub use types::{
    CastleSide, Color, Move, MoveKind, MoveList, Piece, PieceKind, Square, NUM_TILES,
    TILES_PER_RANK,
};

// Public API - evaluation and search
pub use eval::{EvalWeights, Evaluator, StandardEvaluator};
pub use search::{MiniMax, MoveStrategy, SearchParams, SearchResult, SearchStats};

pub(crate) use types::PROMOTION_KIND;
