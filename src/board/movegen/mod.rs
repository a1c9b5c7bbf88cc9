//! Pseudo-legal move rules for every piece type.
//!
//! Moves produced here respect the board edges and never land on a friendly
//! piece, but may still leave the mover's own king attacked. The legality
//! layer in `player.rs` filters those out when a move is made.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::tables::{BISHOP_OFFSETS, QUEEN_OFFSETS, ROOK_OFFSETS};
use super::{Board, Color, Move, MoveKind, MoveList, Piece, PieceKind, Square};

impl Piece {
    /// Pseudo-legal moves of this piece on `board`.
    #[must_use]
    pub fn legal_moves(&self, board: &Board) -> MoveList {
        match self.kind() {
            PieceKind::Pawn => board.pawn_moves(self),
            PieceKind::Knight => board.knight_moves(self),
            PieceKind::Bishop => board.slider_moves(self, &BISHOP_OFFSETS),
            PieceKind::Rook => board.slider_moves(self, &ROOK_OFFSETS),
            PieceKind::Queen => board.slider_moves(self, &QUEEN_OFFSETS),
            PieceKind::King => board.king_moves(self),
        }
    }
}

impl Board {
    pub(crate) fn pseudo_legal_moves(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for piece in self.pieces(color) {
            moves.extend(piece.legal_moves(self));
        }
        moves
    }

    /// Move of a non-pawn piece onto `to`: quiet if empty, a capture if an
    /// enemy stands there, nothing if a friendly piece does.
    fn step_to(&self, piece: &Piece, to: Square) -> Option<Move> {
        match self.cell(to) {
            None => Some(Move::new(MoveKind::Normal, *piece, to)),
            Some(occupant) if occupant.color() != piece.color() => Some(Move::new(
                MoveKind::Attack {
                    captured: occupant,
                },
                *piece,
                to,
            )),
            Some(_) => None,
        }
    }

    /// True if a piece of `attacker` could capture on `square`.
    ///
    /// `attacker_moves` are that side's pseudo-legal moves. Pawn pushes and
    /// castles never attack, while a pawn covers both forward diagonals
    /// whether or not anything stands there.
    pub(crate) fn is_attacked(
        &self,
        square: Square,
        attacker: Color,
        attacker_moves: &MoveList,
    ) -> bool {
        let by_pieces = attacker_moves.iter().any(|mv| {
            mv.destination() == square
                && mv.piece().kind() != PieceKind::Pawn
                && !mv.is_castling()
        });
        by_pieces
            || self
                .pieces(attacker)
                .iter()
                .filter(|piece| piece.kind() == PieceKind::Pawn)
                .any(|pawn| pawns::attack_targets(pawn).contains(&square))
    }
}
