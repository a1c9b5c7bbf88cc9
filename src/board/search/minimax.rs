use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::Instant;

use log::{debug, info, trace};
use parking_lot::Mutex;

use super::{MoveStrategy, SearchParams, SearchResult, SearchStats};
use crate::board::eval::{Evaluator, StandardEvaluator};
use crate::board::{Board, Color, Move};

/// Plain fixed-depth minimax without pruning.
///
/// White maximizes and Black minimizes. Among equally scored root moves the
/// one generated last wins.
pub struct MiniMax<E = StandardEvaluator> {
    evaluator: E,
    params: SearchParams,
}

impl MiniMax<StandardEvaluator> {
    #[must_use]
    pub fn new(depth: u32) -> Self {
        Self::with_params(SearchParams::default().with_depth(depth))
    }

    #[must_use]
    pub fn with_params(params: SearchParams) -> Self {
        MiniMax {
            evaluator: StandardEvaluator::default(),
            params,
        }
    }
}

impl<E: Evaluator> MiniMax<E> {
    #[must_use]
    pub fn with_evaluator(evaluator: E, params: SearchParams) -> Self {
        MiniMax { evaluator, params }
    }

    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Search `board` for the side to move.
    pub fn search(&self, board: &Board) -> SearchResult {
        let start = Instant::now();
        let depth = self.params.depth.max(1);
        let mover = board.side_to_move();
        let nodes = AtomicU64::new(0);
        info!("minimax: searching for {mover} at depth {depth}");

        let root_moves: Vec<&Move> = board.current_player().legal_moves().iter().collect();
        let scores = if self.params.threads > 1 && root_moves.len() > 1 {
            self.score_parallel(board, &root_moves, depth, &nodes)
        } else {
            root_moves
                .iter()
                .map(|mv| self.score_root_move(board, mv, depth, &nodes))
                .collect()
        };

        let mut best_move = None;
        let mut best_score = match mover {
            Color::White => i32::MIN,
            Color::Black => i32::MAX,
        };
        for (mv, score) in root_moves.iter().zip(scores) {
            let Some(score) = score else {
                continue;
            };
            let better = match mover {
                Color::White => score >= best_score,
                Color::Black => score <= best_score,
            };
            if better {
                best_score = score;
                best_move = Some((*mv).clone());
            }
        }

        let stats = SearchStats {
            nodes: nodes.load(Ordering::Relaxed),
            elapsed_ms: start.elapsed().as_millis(),
        };
        match &best_move {
            Some(mv) => info!(
                "minimax: best {mv} score {best_score} nodes {} in {} ms",
                stats.nodes, stats.elapsed_ms
            ),
            None => info!("minimax: no legal move for {mover}"),
        }

        SearchResult {
            score: best_move.as_ref().map(|_| best_score),
            best_move,
            stats,
        }
    }

    /// Score of one root move, or `None` if the move cannot be played.
    fn score_root_move(
        &self,
        board: &Board,
        mv: &Move,
        depth: u32,
        nodes: &AtomicU64,
    ) -> Option<i32> {
        let transition = board.current_player().make_move(mv);
        if !transition.is_done() {
            trace!("minimax: skipping {mv} ({})", transition.status());
            return None;
        }
        let score = match board.side_to_move() {
            Color::White => self.min(transition.board(), depth - 1, nodes),
            Color::Black => self.max(transition.board(), depth - 1, nodes),
        };
        debug!("minimax: {mv} scores {score}");
        Some(score)
    }

    /// Spread the root moves over scoped workers; scores keep root order.
    fn score_parallel(
        &self,
        board: &Board,
        root_moves: &[&Move],
        depth: u32,
        nodes: &AtomicU64,
    ) -> Vec<Option<i32>> {
        let scores = Mutex::new(vec![None; root_moves.len()]);
        let workers = self.params.threads.min(root_moves.len());
        let chunk = root_moves.len().div_ceil(workers);

        thread::scope(|scope| {
            for (chunk_idx, moves) in root_moves.chunks(chunk).enumerate() {
                let scores = &scores;
                scope.spawn(move || {
                    for (offset, mv) in moves.iter().enumerate() {
                        let score = self.score_root_move(board, mv, depth, nodes);
                        scores.lock()[chunk_idx * chunk + offset] = score;
                    }
                });
            }
        });

        scores.into_inner()
    }

    fn min(&self, board: &Board, depth: u32, nodes: &AtomicU64) -> i32 {
        nodes.fetch_add(1, Ordering::Relaxed);
        if depth == 0 {
            return self.frontier_score(board);
        }
        let player = board.current_player();
        let mut lowest = i32::MAX;
        let mut played = false;
        for mv in player.legal_moves() {
            let transition = player.make_move(mv);
            if transition.is_done() {
                played = true;
                let score = self.max(transition.board(), depth - 1, nodes);
                if score <= lowest {
                    lowest = score;
                }
            }
        }
        if played {
            lowest
        } else {
            self.no_move_score(board, depth)
        }
    }

    fn max(&self, board: &Board, depth: u32, nodes: &AtomicU64) -> i32 {
        nodes.fetch_add(1, Ordering::Relaxed);
        if depth == 0 {
            return self.frontier_score(board);
        }
        let player = board.current_player();
        let mut highest = i32::MIN;
        let mut played = false;
        for mv in player.legal_moves() {
            let transition = player.make_move(mv);
            if transition.is_done() {
                played = true;
                let score = self.min(transition.board(), depth - 1, nodes);
                if score >= highest {
                    highest = score;
                }
            }
        }
        if played {
            highest
        } else {
            self.no_move_score(board, depth)
        }
    }

    /// Leaf value. The stalemate test costs one escape search per leaf,
    /// answered from the board's cached escape flag on repeat visits.
    fn frontier_score(&self, board: &Board) -> i32 {
        if board.current_player().is_in_stalemate() {
            0
        } else {
            self.evaluator.evaluate(board, 0)
        }
    }

    /// Interior node whose side to move had nothing playable. Stalemate is a
    /// draw; mate keeps the static score, which carries the depth-scaled
    /// mate bonus.
    fn no_move_score(&self, board: &Board, depth: u32) -> i32 {
        if board.current_player().is_in_check() {
            self.evaluator.evaluate(board, depth)
        } else {
            0
        }
    }
}

impl<E: Evaluator> MoveStrategy for MiniMax<E> {
    fn execute(&self, board: &Board) -> Option<Move> {
        self.search(board).best_move
    }
}
