//! A game in progress: every position reached, indexed by ply.

use log::debug;

use crate::board::{Board, Color, Move, MoveParseError, MoveStatus, Piece, Square};

/// How the game stands for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
}

/// Sequence of positions linked by the moves played between them.
///
/// `positions[ply]` is the board before move `moves[ply]`, so there is
/// always one more position than moves.
#[derive(Clone, Debug)]
pub struct Game {
    positions: Vec<Board>,
    moves: Vec<Move>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Board::standard())
    }
}

impl Game {
    #[must_use]
    pub fn new(start: Board) -> Self {
        Game {
            positions: vec![start],
            moves: Vec::new(),
        }
    }

    /// The position after the last accepted move.
    #[must_use]
    pub fn board(&self) -> &Board {
        // `positions` starts with one entry and `undo` never removes it.
        &self.positions[self.positions.len() - 1]
    }

    /// Number of moves played.
    #[must_use]
    pub fn ply(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn position_at(&self, ply: usize) -> Option<&Board> {
        self.positions.get(ply)
    }

    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Try a move for the side to move; the game only advances on `Done`.
    pub fn make_move(&mut self, mv: &Move) -> MoveStatus {
        let transition = self.board().current_player().make_move(mv);
        let status = transition.status();
        if status.is_done() {
            let next = transition.into_board();
            debug!("game: ply {} {mv}", self.moves.len() + 1);
            self.positions.push(next);
            self.moves.push(mv.clone());
        } else {
            debug!("game: rejected {mv} ({status})");
        }
        status
    }

    /// Play the move between two tiles.
    pub fn play(&mut self, from: Square, to: Square) -> MoveStatus {
        let mv = self.board().find_move(from, to);
        self.make_move(&mv)
    }

    /// Play a move written as `e2e4`.
    pub fn play_uci(&mut self, notation: &str) -> Result<MoveStatus, MoveParseError> {
        let mv = self.board().find_move_uci(notation)?;
        Ok(self.make_move(&mv))
    }

    /// Take back the last move, returning it.
    pub fn undo(&mut self) -> Option<Move> {
        let mv = self.moves.pop()?;
        self.positions.pop();
        debug!("game: undo {mv}");
        Some(mv)
    }

    /// Pieces of `color` that have been captured so far, in capture order.
    #[must_use]
    pub fn captured_pieces(&self, color: Color) -> Vec<Piece> {
        self.moves
            .iter()
            .filter_map(Move::captured_piece)
            .filter(|piece| piece.color() == color)
            .collect()
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        let player = self.board().current_player();
        if player.is_in_checkmate() {
            Outcome::Checkmate {
                winner: player.color().opponent(),
            }
        } else if player.is_in_stalemate() {
            Outcome::Stalemate
        } else {
            Outcome::Ongoing
        }
    }
}
