use log::debug;

use crate::board::Board;
use crate::moves::{Move, possible_moves, side_moves};
use crate::types::{Outcome, Side};

/// Owns the board and the turn flag and enforces the rules of play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controller {
    board: Board,
    side_to_move: Side,
}

impl Controller {
    /// Starting position with light to move.
    pub fn new() -> Self {
        Self::from_position(Board::new(), Side::Light)
    }

    pub fn from_position(board: Board, side_to_move: Side) -> Self {
        Self {
            board,
            side_to_move,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Legal moves for `side` under the mandatory-capture rule.
    pub fn legal_moves(&self, side: Side) -> Vec<Move> {
        side_moves(&self.board, side)
    }

    /// Moves the piece on `(row, col)` may make now: its own captures if its
    /// side has any capture anywhere, otherwise all of its moves.
    pub fn legal_moves_from(&self, row: i32, col: i32) -> Vec<Move> {
        let Some(piece) = self.board.get(row, col) else {
            return Vec::new();
        };

        let moves = possible_moves(&self.board, row, col);
        let capture_exists = self
            .legal_moves(piece.side())
            .iter()
            .any(Move::is_capture);

        if capture_exists {
            moves.into_iter().filter(Move::is_capture).collect()
        } else {
            moves
        }
    }

    /// Plays the move from `requested.start` that lands on `requested.end`.
    /// Capture details on `requested` are ignored and rebuilt from the board.
    /// Returns `false`, leaving the position untouched, when no such move is
    /// legal.
    pub fn apply(&mut self, requested: &Move) -> bool {
        let (start_row, start_col) = (requested.start.row as i32, requested.start.col as i32);
        let Some(mut piece) = self.board.get(start_row, start_col) else {
            debug!("rejected {requested}: origin is empty");
            return false;
        };

        let Some(valid) = self
            .legal_moves_from(start_row, start_col)
            .into_iter()
            .find(|m| m.end == requested.end)
        else {
            debug!("rejected {requested}: no legal move lands there");
            return false;
        };

        self.board.relocate(&valid);

        if !piece.promoted() && valid.end.row as i32 == piece.side().far_row() {
            piece.promote();
            self.board
                .set(valid.end.row as i32, valid.end.col as i32, Some(piece));
        }

        self.side_to_move = self.side_to_move.opponent();
        true
    }

    /// A side loses when it has no pieces or none of its pieces can move.
    /// Light is checked first, so a position where neither side can move is
    /// reported as a dark win.
    pub fn terminal(&self) -> Outcome {
        let (mut light_pieces, mut dark_pieces) = (0u32, 0u32);
        let (mut light_can_move, mut dark_can_move) = (false, false);

        for (pos, piece) in self.board.pieces() {
            let can_move = !possible_moves(&self.board, pos.row as i32, pos.col as i32).is_empty();
            match piece.side() {
                Side::Light => {
                    light_pieces += 1;
                    light_can_move |= can_move;
                }
                Side::Dark => {
                    dark_pieces += 1;
                    dark_can_move |= can_move;
                }
            }
        }

        if light_pieces == 0 || !light_can_move {
            Outcome::DarkWins
        } else if dark_pieces == 0 || !dark_can_move {
            Outcome::LightWins
        } else {
            Outcome::Ongoing
        }
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}
