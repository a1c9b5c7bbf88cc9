pub mod board;
pub mod game;

pub use board::{Board, Color, Move, Piece, PieceKind, Square};
pub use game::{Game, Outcome};
