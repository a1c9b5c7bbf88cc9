use super::super::tables::KING_TARGETS;
use super::super::{Board, MoveList, Piece};

impl Board {
    /// Single steps only; castles are added by the legality layer.
    pub(crate) fn king_moves(&self, piece: &Piece) -> MoveList {
        KING_TARGETS[piece.square().index()]
            .iter()
            .filter_map(|&to| self.step_to(piece, to))
            .collect()
    }
}
