use super::super::tables::KNIGHT_TARGETS;
use super::super::{Board, MoveList, Piece};

impl Board {
    pub(crate) fn knight_moves(&self, piece: &Piece) -> MoveList {
        KNIGHT_TARGETS[piece.square().index()]
            .iter()
            .filter_map(|&to| self.step_to(piece, to))
            .collect()
    }
}
