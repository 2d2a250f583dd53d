use log::debug;
use web_time::Instant;

use crate::board::Board;
use crate::config::EngineConfig;
use crate::game::MoveSelector;
use crate::moves::{Move, side_moves};
use crate::types::Side;

const MIN_SCORE: i32 = i32::MIN;
const MAX_SCORE: i32 = i32::MAX;

/// Result of a root search for dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub best_move: Option<Move>,
    pub score: i32,
    pub nodes: u64,
}

/// Material count from dark's point of view: a man is worth 1, a king 2.
pub fn evaluate(board: &Board) -> i32 {
    board
        .pieces()
        .map(|(_, piece)| match piece.side() {
            Side::Dark => piece.weight(),
            Side::Light => -piece.weight(),
        })
        .sum()
}

/// Fixed-depth alpha-beta searcher for the dark side.
///
/// Children are explored on copies of the board with the move played but
/// no promotion applied.
pub struct Searcher {
    max_depth: u8,
    nodes: u64,
}

impl Searcher {
    pub fn new(max_depth: u8) -> Self {
        Self {
            max_depth,
            nodes: 0,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.search_depth)
    }

    /// Searches the best move for dark.
    ///
    /// The running best starts at the minimum score and is only replaced by
    /// a strictly greater child, so the first of equally scored moves wins
    /// and a root where every reply scores the minimum yields no move.
    pub fn search(&mut self, board: &Board) -> SearchOutcome {
        let start = Instant::now();
        self.nodes = 0;

        let child_depth = self.max_depth.saturating_sub(1);
        let mut best_move = None;
        let mut best_score = MIN_SCORE;
        let mut alpha = MIN_SCORE;
        let beta = MAX_SCORE;

        for mv in side_moves(board, Side::Dark) {
            let mut next = *board;
            next.relocate(&mv);
            let score = self.minimax(&next, child_depth, Side::Light, alpha, beta);

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(best_score);
            if beta <= alpha {
                break;
            }
        }

        debug!(
            "search depth {} visited {} nodes in {:?}: best {:?} score {}",
            self.max_depth,
            self.nodes,
            start.elapsed(),
            best_move.map(|m| m.to_string()),
            best_score
        );

        SearchOutcome {
            best_move,
            score: best_score,
            nodes: self.nodes,
        }
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Both sides take the maximum of their children; replies are always
    /// scored from dark's point of view. A side without moves scores the
    /// bound that makes it lose.
    fn minimax(&mut self, board: &Board, depth: u8, side: Side, alpha: i32, beta: i32) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            return evaluate(board);
        }

        let moves = side_moves(board, side);
        if moves.is_empty() {
            return match side {
                Side::Light => MAX_SCORE,
                Side::Dark => MIN_SCORE,
            };
        }

        let mut value = MIN_SCORE;
        let mut alpha = alpha;

        for mv in moves {
            let mut next = *board;
            next.relocate(&mv);
            value = value.max(self.minimax(&next, depth - 1, side.opponent(), alpha, beta));
            alpha = alpha.max(value);
            if beta <= alpha {
                break;
            }
        }

        value
    }
}

/// [`MoveSelector`] backed by [`Searcher`].
#[derive(Debug, Default, Clone, Copy)]
pub struct AlphaBetaSelector;

impl MoveSelector for AlphaBetaSelector {
    fn select_move(&self, board: &Board, depth: u8) -> Option<Move> {
        Searcher::new(depth).search(board).best_move
    }
}
