//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece, for tests and for hypothetical
//! positions. Move execution uses the same builder to derive successors.
//!
//! # Example
//! ```
//! use board_engine::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let sq = |name: &str| name.parse::<Square>().unwrap();
//! let board = BoardBuilder::new()
//!     .piece(PieceKind::King, Color::White, sq("e1"))
//!     .piece(PieceKind::King, Color::Black, sq("e8"))
//!     .piece(PieceKind::Pawn, Color::White, sq("a2"))
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(board.pieces(Color::White).len(), 2);
//! ```

use super::error::BoardError;
use super::{Board, Color, Piece, PieceKind, Square, NUM_TILES};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    cells: [Option<Piece>; NUM_TILES],
    side_to_move: Color,
    en_passant_pawn: Option<Piece>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder, White to move.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            cells: [None; NUM_TILES],
            side_to_move: Color::White,
            en_passant_pawn: None,
        }
    }

    /// Create a builder holding the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();

        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, &kind) in back_rank.iter().enumerate() {
            builder.set_piece(Piece::new(kind, Color::Black, Square::from_index(file)));
            builder.set_piece(Piece::new(
                PieceKind::Pawn,
                Color::Black,
                Square::from_index(8 + file),
            ));
            builder.set_piece(Piece::new(
                PieceKind::Pawn,
                Color::White,
                Square::from_index(48 + file),
            ));
            builder.set_piece(Piece::new(kind, Color::White, Square::from_index(56 + file)));
        }

        builder
    }

    /// Place an unmoved piece on a tile, replacing whatever was there.
    #[must_use]
    pub fn piece(self, kind: PieceKind, color: Color, square: Square) -> Self {
        self.place(Piece::new(kind, color, square))
    }

    /// Place an existing piece value on its own tile.
    #[must_use]
    pub fn place(mut self, piece: Piece) -> Self {
        self.set_piece(piece);
        self
    }

    /// Remove a piece from a tile.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.cells[square.index()] = None;
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Mark a pawn as capturable en passant on the next move.
    #[must_use]
    pub const fn en_passant(mut self, pawn: Piece) -> Self {
        self.en_passant_pawn = Some(pawn);
        self
    }

    pub(crate) fn set_piece(&mut self, piece: Piece) {
        self.cells[piece.square().index()] = Some(piece);
    }

    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    pub(crate) fn set_en_passant_pawn(&mut self, pawn: Piece) {
        self.en_passant_pawn = Some(pawn);
    }

    /// Build the board, failing if the position cannot exist.
    pub fn try_build(self) -> Result<Board, BoardError> {
        Board::assemble(self.cells, self.side_to_move, self.en_passant_pawn)
    }

    /// Build the board.
    ///
    /// # Panics
    /// Panics if either side does not have exactly one king, or the en passant
    /// pawn is not on the board. Use `try_build` for fallible construction.
    #[must_use]
    pub fn build(self) -> Board {
        match self.try_build() {
            Ok(board) => board,
            Err(err) => panic!("invalid board: {err}"),
        }
    }
}
