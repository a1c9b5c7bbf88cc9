use std::fmt;

use once_cell::sync::{Lazy, OnceCell};

use super::error::BoardError;
use super::player::{calculate_king_castles, Player};
use super::{BoardBuilder, Color, Move, MoveList, Piece, PieceKind, Square, NUM_TILES, TILES_PER_RANK};

/// Cached view data for one side, computed when the board is built.
#[derive(Clone, Debug)]
pub(crate) struct PlayerState {
    pub(crate) color: Color,
    pub(crate) king: Piece,
    pub(crate) legal_moves: MoveList,
    pub(crate) in_check: bool,
    /// Whether some legal move survives the self-check test; filled on first query.
    pub(crate) escape: OnceCell<bool>,
}

/// An immutable position: tile contents, side to move and en passant state.
///
/// Construction does all the work: both sides' piece lists, pseudo-legal
/// moves (castles included) and check flags are derived once and cached.
/// A new position only ever comes from [`Board::execute`] or [`BoardBuilder`].
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) cells: [Option<Piece>; NUM_TILES],
    pub(crate) white_pieces: Vec<Piece>,
    pub(crate) black_pieces: Vec<Piece>,
    pub(crate) side_to_move: Color,
    pub(crate) en_passant_pawn: Option<Piece>,
    pub(crate) players: [PlayerState; 2],
}

static STANDARD_BOARD: Lazy<Board> = Lazy::new(|| BoardBuilder::starting_position().build());

impl Board {
    /// The standard initial setup, White to move.
    #[must_use]
    pub fn standard() -> Self {
        STANDARD_BOARD.clone()
    }

    pub(crate) fn assemble(
        cells: [Option<Piece>; NUM_TILES],
        side_to_move: Color,
        en_passant_pawn: Option<Piece>,
    ) -> Result<Self, BoardError> {
        if let Some(pawn) = en_passant_pawn {
            if pawn.kind() != PieceKind::Pawn || cells[pawn.square().index()] != Some(pawn) {
                return Err(BoardError::InvalidEnPassant {
                    square: pawn.square(),
                });
            }
        }

        let white_pieces = active_pieces(&cells, Color::White);
        let black_pieces = active_pieces(&cells, Color::Black);
        let white_king = find_king(&white_pieces, Color::White)?;
        let black_king = find_king(&black_pieces, Color::Black)?;

        let mut board = Board {
            cells,
            white_pieces,
            black_pieces,
            side_to_move,
            en_passant_pawn,
            players: [
                PlayerState::pending(Color::White, white_king),
                PlayerState::pending(Color::Black, black_king),
            ],
        };

        let white_moves = board.pseudo_legal_moves(Color::White);
        let black_moves = board.pseudo_legal_moves(Color::Black);
        let white_in_check = board.is_attacked(white_king.square(), Color::Black, &black_moves);
        let black_in_check = board.is_attacked(black_king.square(), Color::White, &white_moves);

        let white_castles =
            calculate_king_castles(&board, Color::White, white_in_check, &black_moves);
        let black_castles =
            calculate_king_castles(&board, Color::Black, black_in_check, &white_moves);

        let [white, black] = &mut board.players;
        white.legal_moves = white_moves;
        white.legal_moves.extend(white_castles);
        white.in_check = white_in_check;
        black.legal_moves = black_moves;
        black.legal_moves.extend(black_castles);
        black.in_check = black_in_check;

        Ok(board)
    }

    /// Contents of a tile.
    #[inline]
    #[must_use]
    pub fn cell(&self, square: Square) -> Option<Piece> {
        self.cells[square.index()]
    }

    #[inline]
    #[must_use]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.cells[square.index()].is_some()
    }

    /// Pieces of one side, in tile order.
    #[must_use]
    pub fn pieces(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.white_pieces,
            Color::Black => &self.black_pieces,
        }
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// The pawn that just made a double push and may be taken en passant.
    #[inline]
    #[must_use]
    pub fn en_passant_pawn(&self) -> Option<Piece> {
        self.en_passant_pawn
    }

    #[must_use]
    pub fn player(&self, color: Color) -> Player<'_> {
        Player::new(self, &self.players[color.index()])
    }

    #[must_use]
    pub fn current_player(&self) -> Player<'_> {
        self.player(self.side_to_move)
    }

    #[must_use]
    pub fn white_player(&self) -> Player<'_> {
        self.player(Color::White)
    }

    #[must_use]
    pub fn black_player(&self) -> Player<'_> {
        self.player(Color::Black)
    }

    /// Legal moves of both sides, White's first.
    ///
    /// Meant for resolving a coordinate pair into a move, not for play.
    pub fn all_legal_moves(&self) -> impl Iterator<Item = &Move> {
        self.players[0]
            .legal_moves
            .iter()
            .chain(self.players[1].legal_moves.iter())
    }
}

impl PlayerState {
    fn pending(color: Color, king: Piece) -> Self {
        PlayerState {
            color,
            king,
            legal_moves: MoveList::new(),
            in_check: false,
            escape: OnceCell::new(),
        }
    }
}

fn active_pieces(cells: &[Option<Piece>; NUM_TILES], color: Color) -> Vec<Piece> {
    cells
        .iter()
        .flatten()
        .filter(|piece| piece.color() == color)
        .copied()
        .collect()
}

fn find_king(pieces: &[Piece], color: Color) -> Result<Piece, BoardError> {
    let mut kings = pieces.iter().filter(|p| p.kind() == PieceKind::King);
    match (kings.next(), kings.next()) {
        (Some(king), None) => Ok(*king),
        (None, _) => Err(BoardError::MissingKing { color }),
        (Some(_), Some(_)) => Err(BoardError::DuplicateKing { color }),
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for square in Square::all() {
            let text = self
                .cell(square)
                .map_or('-', |piece| piece.diagram_char());
            write!(f, "{text:>3}")?;
            if (square.index() + 1) % TILES_PER_RANK == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_board_counts() {
        let board = Board::standard();
        assert_eq!(board.pieces(Color::White).len(), 16);
        assert_eq!(board.pieces(Color::Black).len(), 16);
        assert_eq!(board.white_player().legal_moves().len(), 20);
        assert_eq!(board.black_player().legal_moves().len(), 20);
        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(board.current_player().color(), Color::White);
        assert!(board.en_passant_pawn().is_none());
        assert!(!board.white_player().is_in_check());
        assert!(!board.black_player().is_in_check());
        assert_eq!(board.all_legal_moves().count(), 40);
    }

    #[test]
    fn display_grid() {
        let text = Board::standard().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "  r  n  b  q  k  b  n  r");
        assert_eq!(lines[4], "  -  -  -  -  -  -  -  -");
        assert_eq!(lines[7], "  R  N  B  Q  K  B  N  R");
    }

    #[test]
    fn board_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Board>();
    }
}
