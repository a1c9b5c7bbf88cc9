//! Constant board tables: file masks, direction offsets and jump targets.
//!
//! Offsets are raw tile-index deltas on the a8=0 layout. A delta that would
//! cross the a/h file edge is excluded by looking at the origin's file before
//! the delta is applied; the index arithmetic alone cannot see the wrap.

use once_cell::sync::Lazy;

use super::types::{Square, NUM_TILES, TILES_PER_RANK};

const fn file_mask(file: usize) -> [bool; NUM_TILES] {
    let mut mask = [false; NUM_TILES];
    let mut idx = file;
    while idx < NUM_TILES {
        mask[idx] = true;
        idx += TILES_PER_RANK;
    }
    mask
}

pub(crate) const FIRST_FILE: [bool; NUM_TILES] = file_mask(0);
pub(crate) const SECOND_FILE: [bool; NUM_TILES] = file_mask(1);
pub(crate) const SEVENTH_FILE: [bool; NUM_TILES] = file_mask(6);
pub(crate) const EIGHTH_FILE: [bool; NUM_TILES] = file_mask(7);

pub(crate) const KNIGHT_OFFSETS: [i8; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];
pub(crate) const KING_OFFSETS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];
pub(crate) const BISHOP_OFFSETS: [i8; 4] = [-9, -7, 7, 9];
pub(crate) const ROOK_OFFSETS: [i8; 4] = [-8, -1, 1, 8];
pub(crate) const QUEEN_OFFSETS: [i8; 8] = KING_OFFSETS;

/// Knight deltas that leave the board sideways from `from`.
pub(crate) const fn knight_excluded(from: Square, offset: i8) -> bool {
    let idx = from.index();
    (FIRST_FILE[idx] && matches!(offset, -17 | -10 | 6 | 15))
        || (SECOND_FILE[idx] && matches!(offset, -10 | 6))
        || (SEVENTH_FILE[idx] && matches!(offset, -6 | 10))
        || (EIGHTH_FILE[idx] && matches!(offset, -15 | -6 | 10 | 17))
}

/// One-step deltas (king and slider rays) that leave the board sideways from `from`.
pub(crate) const fn step_excluded(from: Square, offset: i8) -> bool {
    let idx = from.index();
    (FIRST_FILE[idx] && matches!(offset, -9 | -1 | 7))
        || (EIGHTH_FILE[idx] && matches!(offset, -7 | 1 | 9))
}

fn jump_targets(from: Square, offsets: &[i8], excluded: fn(Square, i8) -> bool) -> Vec<Square> {
    offsets
        .iter()
        .filter(|&&offset| !excluded(from, offset))
        .filter_map(|&offset| from.offset(offset))
        .collect()
}

/// Destination tiles a knight can reach from each tile on an empty board.
pub(crate) static KNIGHT_TARGETS: Lazy<[Vec<Square>; NUM_TILES]> = Lazy::new(|| {
    std::array::from_fn(|idx| {
        jump_targets(Square::from_index(idx), &KNIGHT_OFFSETS, knight_excluded)
    })
});

/// Destination tiles a king can reach from each tile on an empty board.
pub(crate) static KING_TARGETS: Lazy<[Vec<Square>; NUM_TILES]> = Lazy::new(|| {
    std::array::from_fn(|idx| jump_targets(Square::from_index(idx), &KING_OFFSETS, step_excluded))
});
