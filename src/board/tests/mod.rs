//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `scenarios.rs` - Whole-game sequences: mates, castling, en passant, promotion
//! - `edge_cases.rs` - Special positions and edge cases
//! - `proptest.rs` - Property-based tests

mod scenarios;

use crate::board::{Board, Square};

pub(super) fn sq(name: &str) -> Square {
    Square::from_algebraic(name).unwrap()
}

/// Play coordinate moves from `board`, asserting each one is accepted.
pub(super) fn play(board: Board, moves: &[&str]) -> Board {
    moves.iter().fold(board, |board, uci| {
        let mv = board.find_move_uci(uci).unwrap();
        assert!(!mv.is_invalid(), "{uci} not found");
        let transition = board.current_player().make_move(&mv);
        assert!(transition.is_done(), "{uci}: {}", transition.status());
        transition.into_board()
    })
}
