//! Error types for board operations.

use std::fmt;

use super::types::{Color, Square};

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Tile index outside 0-63
    OutOfRange { index: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::OutOfRange { index } => {
                write!(f, "Tile index {index} out of range (must be 0-63)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for positions that cannot exist
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A side has no king on the board
    MissingKing { color: Color },
    /// A side has more than one king on the board
    DuplicateKing { color: Color },
    /// The en passant pawn is not a pawn standing on its tile
    InvalidEnPassant { square: Square },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::MissingKing { color } => {
                write!(f, "No {color} king on the board")
            }
            BoardError::DuplicateKing { color } => {
                write!(f, "More than one {color} king on the board")
            }
            BoardError::InvalidEnPassant { square } => {
                write!(f, "No pawn eligible for en passant on {square}")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Error type for coordinate move strings such as `e2e4`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string must be 4 characters, or 5 with a promotion letter
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4 or 5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

impl From<SquareError> for MoveParseError {
    fn from(err: SquareError) -> Self {
        match err {
            SquareError::InvalidNotation { notation } => MoveParseError::InvalidSquare { notation },
            SquareError::OutOfRange { index } => MoveParseError::InvalidSquare {
                notation: index.to_string(),
            },
        }
    }
}
