//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use board_engine::board::prelude::*;
//!
//! let board = Board::standard();
//! let best = MiniMax::new(1).execute(&board);
//! assert!(best.is_some());
//! ```

pub use super::{
    find_move, Board, BoardBuilder, Color, Move, MoveList, MoveStatus, MiniMax, MoveStrategy,
    Piece, PieceKind, SearchParams, Square,
};
