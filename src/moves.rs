use std::fmt;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::board::{BOARD_SIZE, Board, in_bounds, square_index};
use crate::piece::Piece;
use crate::types::{Position, Side};

/// Diagonals in scan order: outer loop over the row delta, inner over the
/// column delta.
const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const UPWARD: &[usize] = &[0, 1];
const DOWNWARD: &[usize] = &[2, 3];
const ALL: &[usize] = &[0, 1, 2, 3];

/// Neighbour and landing square of one diagonal from one cell.
#[derive(Debug, Clone, Copy, Default)]
struct Ray {
    step: Option<usize>,
    jump: Option<usize>,
}

static RAYS: Lazy<[[Ray; 4]; BOARD_SIZE * BOARD_SIZE]> = Lazy::new(|| {
    let mut rays = [[Ray::default(); 4]; BOARD_SIZE * BOARD_SIZE];
    for (idx, cell) in rays.iter_mut().enumerate() {
        let row = (idx / BOARD_SIZE) as i32;
        let col = (idx % BOARD_SIZE) as i32;
        for (ray, (dr, dc)) in cell.iter_mut().zip(DIAGONALS) {
            ray.step = on_board(row + dr, col + dc);
            ray.jump = on_board(row + 2 * dr, col + 2 * dc);
        }
    }
    rays
});

fn on_board(row: i32, col: i32) -> Option<usize> {
    in_bounds(row, col).then(|| square_index(row, col))
}

/// A single step or a single jump. Moves carry coordinates only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    pub start: Position,
    pub end: Position,
    /// Square of the jumped piece; `None` for a simple move.
    pub captured: Option<Position>,
}

impl Move {
    pub const fn new(start: Position, end: Position) -> Self {
        Self {
            start,
            end,
            captured: None,
        }
    }

    pub const fn capture(start: Position, end: Position, captured: Position) -> Self {
        Self {
            start,
            end,
            captured: Some(captured),
        }
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { "x" } else { "->" };
        write!(f, "{}{}{}", self.start, sep, self.end)
    }
}

/// Pseudo-legal moves of the piece on `(row, col)`: simple steps first,
/// then single captures. Men only look forward, for steps and captures
/// alike. An empty or off-board origin yields no moves.
pub fn possible_moves(board: &Board, row: i32, col: i32) -> Vec<Move> {
    if !in_bounds(row, col) {
        return Vec::new();
    }
    possible_moves_at(board, square_index(row, col))
}

pub(crate) fn possible_moves_at(board: &Board, from: usize) -> Vec<Move> {
    let Some(piece) = board.piece_at_index(from) else {
        return Vec::new();
    };

    let origin = Position::from_index(from);
    let rays = &RAYS[from];
    let dirs = directions(piece);
    let mut moves = Vec::with_capacity(dirs.len() * 2);

    for &d in dirs {
        if let Some(step) = rays[d].step
            && board.is_empty_at(step)
        {
            moves.push(Move::new(origin, Position::from_index(step)));
        }
    }

    for &d in dirs {
        if let Ray {
            step: Some(step),
            jump: Some(jump),
        } = rays[d]
            && board.is_empty_at(jump)
            && board
                .piece_at_index(step)
                .is_some_and(|jumped| jumped.side() != piece.side())
        {
            moves.push(Move::capture(
                origin,
                Position::from_index(jump),
                Position::from_index(step),
            ));
        }
    }

    moves
}

/// All moves available to `side`, scanning the board row by row. When any
/// capture exists only captures are returned.
pub fn side_moves(board: &Board, side: Side) -> Vec<Move> {
    let mut bits = board.side_mask(side);
    let mut moves = Vec::new();
    while bits != 0 {
        let idx = bits.trailing_zeros() as usize;
        bits &= bits - 1;
        moves.extend(possible_moves_at(board, idx));
    }
    retain_captures_if_any(moves)
}

fn retain_captures_if_any(moves: Vec<Move>) -> Vec<Move> {
    if moves.iter().any(Move::is_capture) {
        moves.into_iter().filter(Move::is_capture).collect()
    } else {
        moves
    }
}

fn directions(piece: Piece) -> &'static [usize] {
    if piece.promoted() {
        return ALL;
    }
    match piece.side() {
        Side::Light => UPWARD,
        Side::Dark => DOWNWARD,
    }
}
