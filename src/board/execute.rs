//! Move execution and coordinate lookup.

use super::error::MoveParseError;
use super::{Board, BoardBuilder, Move, MoveKind, Piece, Square};

impl Board {
    /// Position after `mv`, with the other side to move.
    ///
    /// No legality check happens here; callers go through
    /// [`Player::make_move`](super::Player::make_move) for that.
    ///
    /// # Panics
    /// Panics when given [`Move::invalid`].
    #[must_use]
    pub fn execute(&self, mv: &Move) -> Board {
        if mv.is_invalid() {
            panic!("cannot execute the invalid move");
        }
        self.apply(mv, mv.kind()).build()
    }

    fn apply(&self, mv: &Move, kind: &MoveKind) -> BoardBuilder {
        let piece = mv.piece();
        match kind {
            MoveKind::Normal | MoveKind::PawnMove => {
                let mut builder = self.successor(piece, None, None);
                builder.set_piece(piece.moved_to(mv.destination()));
                builder
            }
            MoveKind::Attack { captured }
            | MoveKind::PawnAttack { captured }
            | MoveKind::EnPassant { captured } => {
                let mut builder = self.successor(piece, Some(*captured), None);
                builder.set_piece(piece.moved_to(mv.destination()));
                builder
            }
            MoveKind::PawnJump => {
                let mut builder = self.successor(piece, None, None);
                let pawn = piece.moved_to(mv.destination());
                builder.set_piece(pawn);
                builder.set_en_passant_pawn(pawn);
                builder
            }
            MoveKind::Castle {
                rook,
                rook_destination,
                ..
            } => {
                let mut builder = self.successor(piece, None, Some(*rook));
                builder.set_piece(piece.castled_to(mv.destination()));
                builder.set_piece(rook.moved_to(*rook_destination));
                builder
            }
            MoveKind::Promotion { inner, promote_to } => {
                let mut builder = self.apply(mv, inner);
                builder.set_piece(piece.moved_to(mv.destination()).promoted_to(*promote_to));
                builder
            }
            MoveKind::Invalid => unreachable!("invalid move filtered in execute"),
        }
    }

    /// Builder holding every piece except the mover, `captured` and the
    /// castling `rook`, with the turn passed to the opponent.
    fn successor(
        &self,
        mover: Piece,
        captured: Option<Piece>,
        rook: Option<Piece>,
    ) -> BoardBuilder {
        let mut builder = BoardBuilder::new();
        for piece in self.white_pieces.iter().chain(self.black_pieces.iter()) {
            if *piece == mover || Some(*piece) == captured || Some(*piece) == rook {
                continue;
            }
            builder.set_piece(*piece);
        }
        builder.set_side_to_move(mover.color().opponent());
        builder
    }

    /// Find the move of either side going from `from` to `to`.
    ///
    /// Returns [`Move::invalid`] if nothing matches.
    #[must_use]
    pub fn find_move(&self, from: Square, to: Square) -> Move {
        self.all_legal_moves()
            .find(|mv| mv.origin() == from && mv.destination() == to)
            .cloned()
            .unwrap_or_else(Move::invalid)
    }

    /// Parse coordinate notation such as `e2e4` and look the move up.
    ///
    /// A trailing promotion letter (`e7e8q`) is accepted and ignored, since
    /// pawns always promote to a queen.
    pub fn find_move_uci(&self, notation: &str) -> Result<Move, MoveParseError> {
        let len = notation.len();
        if !(4..=5).contains(&len) || !notation.is_ascii() {
            return Err(MoveParseError::InvalidLength { len });
        }
        let from: Square = notation[0..2].parse()?;
        let to: Square = notation[2..4].parse()?;
        Ok(self.find_move(from, to))
    }
}

/// Free-function form of [`Board::find_move`].
#[must_use]
pub fn find_move(board: &Board, from: Square, to: Square) -> Move {
    board.find_move(from, to)
}
