//! Static evaluation.

use super::{Board, Color, Player};

/// Scores a position from White's point of view: positive favours White.
///
/// `depth` is the remaining search depth at the node being scored.
pub trait Evaluator: Send + Sync {
    fn evaluate(&self, board: &Board, depth: u32) -> i32;
}

/// Bonus weights used by [`StandardEvaluator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvalWeights {
    /// Awarded when the opponent is in check
    pub check: i32,
    /// Awarded when the opponent is mated, scaled by `depth`
    pub checkmate: i32,
    /// Multiplier per remaining ply for the mate bonus
    pub depth: i32,
    /// Awarded once a side has castled
    pub castle: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        EvalWeights {
            check: 50,
            checkmate: 10_000,
            depth: 100,
            castle: 60,
        }
    }
}

/// Material, mobility, check, mate and castling terms, per side.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardEvaluator {
    weights: EvalWeights,
}

impl StandardEvaluator {
    #[must_use]
    pub const fn new(weights: EvalWeights) -> Self {
        StandardEvaluator { weights }
    }

    #[must_use]
    pub const fn weights(&self) -> EvalWeights {
        self.weights
    }

    fn score_player(&self, player: Player<'_>, depth: u32) -> i32 {
        let material: i32 = player.active_pieces().iter().map(|p| p.value()).sum();
        let mobility = player.legal_moves().len() as i32;
        let opponent = player.opponent();

        let check = if opponent.is_in_check() {
            self.weights.check
        } else {
            0
        };
        let checkmate = if opponent.is_in_checkmate() {
            self.weights.checkmate.saturating_mul(self.depth_bonus(depth))
        } else {
            0
        };
        let castled = if player.is_castled() {
            self.weights.castle
        } else {
            0
        };

        material + mobility + check + checkmate + castled
    }

    /// Mates found with more depth left are closer to the root.
    fn depth_bonus(&self, depth: u32) -> i32 {
        if depth == 0 {
            1
        } else {
            self.weights
                .depth
                .saturating_mul(i32::try_from(depth).unwrap_or(i32::MAX))
        }
    }
}

impl Evaluator for StandardEvaluator {
    fn evaluate(&self, board: &Board, depth: u32) -> i32 {
        self.score_player(board.player(Color::White), depth)
            - self.score_player(board.player(Color::Black), depth)
    }
}
