//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// Chess piece types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Uppercase letter used in move text and board diagrams.
    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Material value used by the evaluator.
    ///
    /// Pawn=100, Knight=300, Bishop=300, Rook=500, Queen=900, King=10000.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 300,
            PieceKind::Bishop => 300,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 10000,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Piece type a pawn turns into on the far rank.
pub(crate) const PROMOTION_KIND: PieceKind = PieceKind::Queen;

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Tile-index step of one pawn push: White walks toward index 0 (rank 8).
    #[inline]
    #[must_use]
    pub(crate) const fn direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn is_pawn_start_rank(self, square: Square) -> bool {
        match self {
            Color::White => square.rank() == 2,
            Color::Black => square.rank() == 7,
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn is_promotion_rank(self, square: Square) -> bool {
        match self {
            Color::White => square.rank() == 8,
            Color::Black => square.rank() == 1,
        }
    }

    /// Case a piece letter takes for this side in text diagrams.
    #[must_use]
    pub(crate) fn apply_case(self, letter: char) -> char {
        match self {
            Color::White => letter.to_ascii_uppercase(),
            Color::Black => letter.to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A piece standing on a tile.
///
/// Pieces are values: moving one never mutates it, execution places a fresh
/// `Piece` at the destination with `first_move` cleared. Equality covers the
/// whole state, so a piece that has moved compares unequal to its former self.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    square: Square,
    first_move: bool,
    castled: bool,
}

impl Piece {
    /// A piece that has not moved yet.
    #[must_use]
    pub const fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        Piece {
            kind,
            color,
            square,
            first_move: true,
            castled: false,
        }
    }

    /// Override the first-move flag, for positions built mid-game.
    #[must_use]
    pub const fn with_first_move(mut self, first_move: bool) -> Self {
        self.first_move = first_move;
        self
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub const fn square(&self) -> Square {
        self.square
    }

    /// True until the piece has moved once.
    #[inline]
    #[must_use]
    pub const fn is_first_move(&self) -> bool {
        self.first_move
    }

    /// Set on a king once it has castled, kept through later moves.
    #[inline]
    #[must_use]
    pub const fn is_castled(&self) -> bool {
        self.castled
    }

    #[inline]
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.kind.value()
    }

    /// The piece after a move to `destination`. A castled king stays castled.
    #[must_use]
    pub(crate) const fn moved_to(&self, destination: Square) -> Piece {
        Piece {
            kind: self.kind,
            color: self.color,
            square: destination,
            first_move: false,
            castled: self.castled,
        }
    }

    /// The king after castling to `destination`.
    #[must_use]
    pub(crate) const fn castled_to(&self, destination: Square) -> Piece {
        Piece {
            castled: true,
            ..self.moved_to(destination)
        }
    }

    /// The same piece with a different type, used for promotion.
    #[must_use]
    pub(crate) const fn promoted_to(&self, kind: PieceKind) -> Piece {
        Piece { kind, ..*self }
    }

    /// Diagram letter, uppercase for White and lowercase for Black.
    #[must_use]
    pub fn diagram_char(&self) -> char {
        self.color.apply_case(self.kind.letter())
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.diagram_char())
    }
}
