//! Move types and move list.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::piece::{Color, Piece, PieceKind};
use super::square::Square;

/// Which rook a castle uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

/// What kind of state transition a move performs.
///
/// `Promotion` wraps the pawn move that reaches the far rank; executing it
/// runs the wrapped move first and then swaps the pawn for the new piece.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveKind {
    /// Non-pawn move to an empty tile
    Normal,
    /// Non-pawn capture
    Attack { captured: Piece },
    /// Single pawn push
    PawnMove,
    /// Diagonal pawn capture
    PawnAttack { captured: Piece },
    /// Double pawn push from the starting rank
    PawnJump,
    /// Pawn capture of a pawn that sits beside it rather than on the destination
    EnPassant { captured: Piece },
    /// King move that brings a rook along
    Castle {
        side: CastleSide,
        rook: Piece,
        rook_destination: Square,
    },
    Promotion {
        inner: Box<MoveKind>,
        promote_to: PieceKind,
    },
    /// Lookup failure sentinel; executing it is a bug in the caller
    Invalid,
}

impl MoveKind {
    fn captured(&self) -> Option<Piece> {
        match self {
            MoveKind::Attack { captured }
            | MoveKind::PawnAttack { captured }
            | MoveKind::EnPassant { captured } => Some(*captured),
            MoveKind::Promotion { inner, .. } => inner.captured(),
            _ => None,
        }
    }
}

/// A state transition from one position to the next.
///
/// Moves do not hold on to the position they were generated from; the board
/// that produced a move is passed back in when the move is executed. Two
/// moves are equal when the mover (including its first-move state) and the
/// destination match.
#[derive(Clone, Debug)]
pub struct Move {
    kind: MoveKind,
    piece: Piece,
    destination: Square,
}

/// Stand-in mover for the invalid move; never placed on a board.
const NO_PIECE: Piece = Piece::new(PieceKind::Pawn, Color::White, Square::from_index(0));

impl Move {
    #[must_use]
    pub(crate) const fn new(kind: MoveKind, piece: Piece, destination: Square) -> Self {
        Move {
            kind,
            piece,
            destination,
        }
    }

    /// The sentinel returned when no legal move matches a lookup.
    #[must_use]
    pub const fn invalid() -> Self {
        Move {
            kind: MoveKind::Invalid,
            piece: NO_PIECE,
            destination: Square::from_index(0),
        }
    }

    /// Wrap a pawn move landing on the far rank into a promotion.
    #[must_use]
    pub(crate) fn promote(self, promote_to: PieceKind) -> Self {
        Move {
            kind: MoveKind::Promotion {
                inner: Box::new(self.kind),
                promote_to,
            },
            ..self
        }
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> &MoveKind {
        &self.kind
    }

    /// The piece as it stood before the move.
    #[inline]
    #[must_use]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    #[inline]
    #[must_use]
    pub fn origin(&self) -> Square {
        self.piece.square()
    }

    #[inline]
    #[must_use]
    pub fn destination(&self) -> Square {
        self.destination
    }

    #[inline]
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self.kind, MoveKind::Invalid)
    }

    /// Returns true if this move captures a piece (including en passant)
    #[must_use]
    pub fn is_attack(&self) -> bool {
        self.kind.captured().is_some()
    }

    #[must_use]
    pub fn captured_piece(&self) -> Option<Piece> {
        self.kind.captured()
    }

    #[must_use]
    pub fn is_castling(&self) -> bool {
        matches!(self.kind, MoveKind::Castle { .. })
    }

    #[must_use]
    pub fn is_en_passant(&self) -> bool {
        match &self.kind {
            MoveKind::EnPassant { .. } => true,
            MoveKind::Promotion { inner, .. } => matches!(**inner, MoveKind::EnPassant { .. }),
            _ => false,
        }
    }

    #[must_use]
    pub fn is_pawn_jump(&self) -> bool {
        matches!(self.kind, MoveKind::PawnJump)
    }

    /// Piece type a promotion turns the pawn into.
    #[must_use]
    pub fn promotion(&self) -> Option<PieceKind> {
        match &self.kind {
            MoveKind::Promotion { promote_to, .. } => Some(*promote_to),
            _ => None,
        }
    }

    /// Coordinate form such as `e2e4`.
    #[must_use]
    pub fn to_coordinate_string(&self) -> String {
        format!("{}{}", self.origin(), self.destination)
    }

    fn fmt_kind(&self, kind: &MoveKind, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = self.piece.kind().letter();
        match kind {
            MoveKind::Normal => write!(f, "{letter}{}", self.destination),
            MoveKind::Attack { .. } => write!(f, "{letter}x{}", self.destination),
            MoveKind::PawnMove | MoveKind::PawnJump => write!(f, "{}", self.destination),
            MoveKind::PawnAttack { .. } | MoveKind::EnPassant { .. } => {
                write!(f, "{}x{}", self.origin().file_char(), self.destination)
            }
            MoveKind::Castle {
                side: CastleSide::KingSide,
                ..
            } => write!(f, "0-0"),
            MoveKind::Castle {
                side: CastleSide::QueenSide,
                ..
            } => write!(f, "0-0-0"),
            MoveKind::Promotion { inner, promote_to } => {
                self.fmt_kind(inner, f)?;
                write!(f, "={}", promote_to.letter())
            }
            MoveKind::Invalid => Ok(()),
        }
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.is_invalid() == other.is_invalid()
            && self.piece == other.piece
            && self.destination == other.destination
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.piece.hash(state);
        self.destination.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_kind(&self.kind, f)
    }
}

/// Ordered list of moves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList { moves: Vec::new() }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    pub(crate) fn extend(&mut self, other: MoveList) {
        self.moves.extend(other.moves);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&Move> {
        self.moves.get(idx)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        MoveList {
            moves: iter.into_iter().collect(),
        }
    }
}
