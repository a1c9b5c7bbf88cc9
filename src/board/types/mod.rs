//! Core chess types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `PieceKind`, `Color` and `Piece` - piece types, sides and placed pieces
//! - `Square` - tile index on the 64-tile board
//! - `Move`, `MoveKind` and `MoveList` - move representation

mod moves;
mod piece;
mod square;

pub use moves::{CastleSide, Move, MoveKind, MoveList};
pub use piece::{Color, Piece, PieceKind};
pub use square::{Square, NUM_TILES, TILES_PER_RANK};

pub(crate) use piece::PROMOTION_KIND;
