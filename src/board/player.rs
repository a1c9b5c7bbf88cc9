//! Per-side view over a position: legal moves, check state and castling.

use std::borrow::Cow;
use std::fmt;

use super::state::PlayerState;
use super::{Board, CastleSide, Color, Move, MoveKind, MoveList, Piece, PieceKind, Square};

/// Outcome of trying to make a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveStatus {
    /// The move was played; the transition holds the new position.
    Done,
    /// The move is not among the mover's legal moves.
    IllegalMove,
    /// The move would leave the mover's own king attacked.
    LeavesPlayerInCheck,
}

impl MoveStatus {
    #[inline]
    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, MoveStatus::Done)
    }
}

impl fmt::Display for MoveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveStatus::Done => write!(f, "done"),
            MoveStatus::IllegalMove => write!(f, "illegal move"),
            MoveStatus::LeavesPlayerInCheck => write!(f, "leaves king in check"),
        }
    }
}

/// Result of [`Player::make_move`].
///
/// A rejected move borrows the unchanged original position; an accepted one
/// owns the successor.
#[derive(Clone, Debug)]
pub struct MoveTransition<'a> {
    board: Cow<'a, Board>,
    mv: Move,
    status: MoveStatus,
}

impl<'a> MoveTransition<'a> {
    #[inline]
    #[must_use]
    pub fn status(&self) -> MoveStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.status.is_done()
    }

    /// The new position if the move was done, otherwise the original one.
    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn mv(&self) -> &Move {
        &self.mv
    }

    #[must_use]
    pub fn into_board(self) -> Board {
        self.board.into_owned()
    }
}

/// One side of a position.
#[derive(Clone, Copy)]
pub struct Player<'a> {
    board: &'a Board,
    state: &'a PlayerState,
}

impl<'a> Player<'a> {
    pub(crate) fn new(board: &'a Board, state: &'a PlayerState) -> Self {
        Player { board, state }
    }

    #[inline]
    #[must_use]
    pub fn color(&self) -> Color {
        self.state.color
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &'a Board {
        self.board
    }

    /// Pseudo-legal moves including castles. Moves that expose the king are
    /// only rejected by [`Player::make_move`].
    #[inline]
    #[must_use]
    pub fn legal_moves(&self) -> &'a MoveList {
        &self.state.legal_moves
    }

    #[must_use]
    pub fn active_pieces(&self) -> &'a [Piece] {
        self.board.pieces(self.state.color)
    }

    #[inline]
    #[must_use]
    pub fn king(&self) -> Piece {
        self.state.king
    }

    #[must_use]
    pub fn opponent(&self) -> Player<'a> {
        self.board.player(self.state.color.opponent())
    }

    #[must_use]
    pub fn is_move_legal(&self, mv: &Move) -> bool {
        self.state.legal_moves.contains(mv)
    }

    /// True if an enemy piece attacks this side's king.
    #[inline]
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.state.in_check
    }

    /// Attacked, and every legal move leaves the king attacked.
    #[must_use]
    pub fn is_in_checkmate(&self) -> bool {
        self.state.in_check && !self.has_escape_moves()
    }

    /// Not attacked, but every legal move would put the king in check.
    #[must_use]
    pub fn is_in_stalemate(&self) -> bool {
        !self.state.in_check && !self.has_escape_moves()
    }

    /// True if some legal move can be made without exposing the king.
    ///
    /// Each candidate builds a full successor position, so the answer is
    /// cached on the board after the first call.
    #[must_use]
    pub fn has_escape_moves(&self) -> bool {
        *self.state.escape.get_or_init(|| {
            self.state
                .legal_moves
                .iter()
                .any(|mv| self.make_move(mv).is_done())
        })
    }

    /// True once this side has castled.
    #[must_use]
    pub fn is_castled(&self) -> bool {
        self.state.king.is_castled()
    }

    #[must_use]
    pub fn is_king_side_castle_capable(&self) -> bool {
        self.castle_rook(CastleSide::KingSide).is_some()
    }

    #[must_use]
    pub fn is_queen_side_castle_capable(&self) -> bool {
        self.castle_rook(CastleSide::QueenSide).is_some()
    }

    /// The unmoved rook on `side`'s corner, if the king is also unmoved at home.
    fn castle_rook(&self, side: CastleSide) -> Option<Piece> {
        castle_rook(self.board, self.state.color, self.state.king, side)
    }

    /// Validate and play a move.
    ///
    /// Illegal moves and moves that leave the mover's king attacked come back
    /// tagged with the original position; only `Done` carries a new one.
    /// Kings are never captured: such a move counts as illegal.
    #[must_use]
    pub fn make_move(&self, mv: &Move) -> MoveTransition<'a> {
        let takes_king = mv
            .captured_piece()
            .is_some_and(|piece| piece.kind() == PieceKind::King);
        if takes_king || !self.is_move_legal(mv) {
            return MoveTransition {
                board: Cow::Borrowed(self.board),
                mv: mv.clone(),
                status: MoveStatus::IllegalMove,
            };
        }

        let successor = self.board.execute(mv);
        if successor.player(self.state.color).is_in_check() {
            return MoveTransition {
                board: Cow::Borrowed(self.board),
                mv: mv.clone(),
                status: MoveStatus::LeavesPlayerInCheck,
            };
        }

        MoveTransition {
            board: Cow::Owned(successor),
            mv: mv.clone(),
            status: MoveStatus::Done,
        }
    }
}

impl fmt::Debug for Player<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("color", &self.state.color)
            .field("legal_moves", &self.state.legal_moves.len())
            .field("in_check", &self.state.in_check)
            .finish()
    }
}

impl fmt::Display for Player<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.state.color)
    }
}

/// Tiles involved in one castle, by index on the a8=0 layout.
struct CastleLane {
    king_from: usize,
    king_to: usize,
    rook_from: usize,
    rook_to: usize,
    /// Tiles between king and rook, all of which must be empty.
    between: &'static [usize],
    /// Tiles the king crosses or lands on, none of which may be attacked.
    transit: &'static [usize],
}

const fn lane(color: Color, side: CastleSide) -> CastleLane {
    match (color, side) {
        (Color::White, CastleSide::KingSide) => CastleLane {
            king_from: 60,
            king_to: 62,
            rook_from: 63,
            rook_to: 61,
            between: &[61, 62],
            transit: &[61, 62],
        },
        (Color::White, CastleSide::QueenSide) => CastleLane {
            king_from: 60,
            king_to: 58,
            rook_from: 56,
            rook_to: 59,
            between: &[57, 58, 59],
            transit: &[58, 59],
        },
        (Color::Black, CastleSide::KingSide) => CastleLane {
            king_from: 4,
            king_to: 6,
            rook_from: 7,
            rook_to: 5,
            between: &[5, 6],
            transit: &[5, 6],
        },
        (Color::Black, CastleSide::QueenSide) => CastleLane {
            king_from: 4,
            king_to: 2,
            rook_from: 0,
            rook_to: 3,
            between: &[1, 2, 3],
            transit: &[2, 3],
        },
    }
}

fn castle_rook(board: &Board, color: Color, king: Piece, side: CastleSide) -> Option<Piece> {
    let lane = lane(color, side);
    if !king.is_first_move() || king.square().index() != lane.king_from {
        return None;
    }
    board
        .cell(Square::from_index(lane.rook_from))
        .filter(|rook| {
            rook.kind() == PieceKind::Rook && rook.color() == color && rook.is_first_move()
        })
}

/// Castle moves available to `color`, checked against the opponent's
/// current pseudo-legal moves.
pub(crate) fn calculate_king_castles(
    board: &Board,
    color: Color,
    in_check: bool,
    opponent_moves: &MoveList,
) -> MoveList {
    let mut castles = MoveList::new();
    if in_check {
        return castles;
    }
    let king = board.players[color.index()].king;

    for side in [CastleSide::KingSide, CastleSide::QueenSide] {
        let lane = lane(color, side);
        let Some(rook) = castle_rook(board, color, king, side) else {
            continue;
        };
        let path_clear = lane
            .between
            .iter()
            .all(|&idx| !board.is_occupied(Square::from_index(idx)));
        let path_safe = lane.transit.iter().all(|&idx| {
            !board.is_attacked(Square::from_index(idx), color.opponent(), opponent_moves)
        });
        if path_clear && path_safe {
            castles.push(Move::new(
                MoveKind::Castle {
                    side,
                    rook,
                    rook_destination: Square::from_index(lane.rook_to),
                },
                king,
                Square::from_index(lane.king_to),
            ));
        }
    }
    castles
}
