//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Number of tiles on the board.
pub const NUM_TILES: usize = 64;

/// Number of tiles in one rank.
pub const TILES_PER_RANK: usize = 8;

/// A tile on the board, stored as an index 0..64.
///
/// Index 0 is a8 and index 63 is h1: the board is laid out rank 8 first, the
/// way it is drawn with White at the bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    /// Create a square from a tile index, `None` when out of range.
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < NUM_TILES {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    /// Create a square from a tile index known to be in range.
    ///
    /// # Panics
    /// Panics if `index >= 64`.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < NUM_TILES, "tile index out of range");
        Square(index as u8)
    }

    /// Tile index (0-63, a8=0, h1=63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// File as 0-7, where 0 = file a
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.index() % TILES_PER_RANK
    }

    /// Rank as printed on the board, 1-8
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        TILES_PER_RANK - self.index() / TILES_PER_RANK
    }

    /// File letter, 'a'..='h'
    #[inline]
    #[must_use]
    pub const fn file_char(self) -> char {
        (b'a' + self.file() as u8) as char
    }

    /// Apply a raw tile offset, `None` when the result leaves 0..64.
    ///
    /// No file-wrap check happens here; callers exclude wrapping offsets first.
    #[inline]
    #[must_use]
    pub(crate) const fn offset(self, delta: i8) -> Option<Square> {
        let target = self.0 as i16 + delta as i16;
        if target >= 0 && target < NUM_TILES as i16 {
            Some(Square(target as u8))
        } else {
            None
        }
    }

    /// Parse algebraic notation such as `"e2"`.
    pub fn from_algebraic(name: &str) -> Result<Self, SquareError> {
        let bytes = name.as_bytes();
        if bytes.len() != 2 {
            return Err(SquareError::InvalidNotation {
                notation: name.to_string(),
            });
        }
        let file = match bytes[0] {
            b'a'..=b'h' => (bytes[0] - b'a') as usize,
            _ => {
                return Err(SquareError::InvalidNotation {
                    notation: name.to_string(),
                })
            }
        };
        let rank = match bytes[1] {
            b'1'..=b'8' => (bytes[1] - b'0') as usize,
            _ => {
                return Err(SquareError::InvalidNotation {
                    notation: name.to_string(),
                })
            }
        };
        Ok(Square(((TILES_PER_RANK - rank) * TILES_PER_RANK + file) as u8))
    }

    /// Iterate over all 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_TILES as u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank())
    }
}

impl TryFrom<usize> for Square {
    type Error = SquareError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Square::new(index).ok_or(SquareError::OutOfRange { index })
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners() {
        assert_eq!(Square::from_algebraic("a8").unwrap().index(), 0);
        assert_eq!(Square::from_algebraic("h8").unwrap().index(), 7);
        assert_eq!(Square::from_algebraic("a1").unwrap().index(), 56);
        assert_eq!(Square::from_algebraic("h1").unwrap().index(), 63);
        assert_eq!(Square::from_algebraic("e2").unwrap().index(), 52);
    }

    #[test]
    fn display_matches_parse() {
        for sq in Square::all() {
            let name = sq.to_string();
            assert_eq!(name.parse::<Square>().unwrap(), sq);
        }
    }

    #[test]
    fn rejects_bad_notation() {
        assert!(matches!(
            Square::from_algebraic("i1"),
            Err(SquareError::InvalidNotation { .. })
        ));
        assert!(Square::from_algebraic("a9").is_err());
        assert!(Square::from_algebraic("a").is_err());
        assert!(Square::try_from(64usize).is_err());
    }

    #[test]
    fn offset_stays_in_range() {
        let a8 = Square::from_index(0);
        assert_eq!(a8.offset(-1), None);
        assert_eq!(a8.offset(8), Square::new(8));
        assert_eq!(Square::from_index(63).offset(1), None);
    }
}
