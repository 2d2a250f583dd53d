use crate::moves::Move;
use crate::piece::Piece;
use crate::types::{Position, Side};

pub const BOARD_SIZE: usize = 8;
const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;
const INITIAL_ROWS: i32 = 3;

/// Draughts board state represented by three bitboards indexed by
/// `row * 8 + col`. Copying the board copies every piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    light: u64,
    dark: u64,
    kings: u64,
}

impl Board {
    /// Creates the starting position: dark men on the playable cells of
    /// rows 0..=2, light men on the playable cells of rows 5..=7.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for row in 0..BOARD_SIZE as i32 {
            for col in 0..BOARD_SIZE as i32 {
                if !is_playable(row, col) {
                    continue;
                }
                if row < INITIAL_ROWS {
                    board.set(row, col, Some(Piece::man(Side::Dark)));
                } else if row >= BOARD_SIZE as i32 - INITIAL_ROWS {
                    board.set(row, col, Some(Piece::man(Side::Light)));
                }
            }
        }
        board
    }

    pub const fn empty() -> Self {
        Self {
            light: 0,
            dark: 0,
            kings: 0,
        }
    }

    /// Returns the piece on `(row, col)`. Off-board coordinates read as empty.
    pub fn get(&self, row: i32, col: i32) -> Option<Piece> {
        if !in_bounds(row, col) {
            return None;
        }
        self.piece_at_index(square_index(row, col))
    }

    /// Overwrites `(row, col)`. Off-board coordinates are ignored.
    pub fn set(&mut self, row: i32, col: i32, piece: Option<Piece>) {
        if !in_bounds(row, col) {
            return;
        }
        debug_assert!(
            piece.is_none() || is_playable(row, col),
            "pieces may only stand on playable cells, got ({row}, {col})"
        );

        let square = bit(square_index(row, col));
        self.light &= !square;
        self.dark &= !square;
        self.kings &= !square;

        if let Some(piece) = piece {
            match piece.side() {
                Side::Light => self.light |= square,
                Side::Dark => self.dark |= square,
            }
            if piece.promoted() {
                self.kings |= square;
            }
        }
    }

    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.get(pos.row as i32, pos.col as i32)
    }

    /// Moves the piece on `mv.start` to `mv.end` and removes the captured
    /// piece, if any. Does not promote.
    pub fn relocate(&mut self, mv: &Move) {
        let piece = self.piece_at(mv.start);
        self.set(mv.end.row as i32, mv.end.col as i32, piece);
        self.set(mv.start.row as i32, mv.start.col as i32, None);
        if let Some(captured) = mv.captured {
            self.set(captured.row as i32, captured.col as i32, None);
        }
    }

    /// Returns `(light_count, dark_count)`.
    pub fn count(&self) -> (u8, u8) {
        (self.light.count_ones() as u8, self.dark.count_ones() as u8)
    }

    pub fn total(&self) -> u8 {
        (self.light | self.dark).count_ones() as u8
    }

    /// Iterates over every piece in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        let mut bits = self.light | self.dark;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let idx = bits.trailing_zeros() as usize;
            bits &= bits - 1;
            self.piece_at_index(idx)
                .map(|piece| (Position::from_index(idx), piece))
        })
    }

    /// Converts the board to `[u8; 64]` where 0=empty, 1=light man,
    /// 2=dark man, 3=light king, 4=dark king.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut cells = [0u8; NUM_SQUARES];
        for (pos, piece) in self.pieces() {
            cells[pos.index()] = match (piece.side(), piece.promoted()) {
                (Side::Light, false) => 1,
                (Side::Dark, false) => 2,
                (Side::Light, true) => 3,
                (Side::Dark, true) => 4,
            };
        }
        cells
    }

    pub(crate) fn piece_at_index(&self, idx: usize) -> Option<Piece> {
        let square = bit(idx);
        let side = if (self.light & square) != 0 {
            Side::Light
        } else if (self.dark & square) != 0 {
            Side::Dark
        } else {
            return None;
        };
        Some(if (self.kings & square) != 0 {
            Piece::king(side)
        } else {
            Piece::man(side)
        })
    }

    pub(crate) fn is_empty_at(&self, idx: usize) -> bool {
        ((self.light | self.dark) & bit(idx)) == 0
    }

    /// Occupancy mask of one side.
    pub(crate) fn side_mask(&self, side: Side) -> u64 {
        match side {
            Side::Light => self.light,
            Side::Dark => self.dark,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// A cell is playable ("dark") when `row + col` is odd.
pub fn is_playable(row: i32, col: i32) -> bool {
    (row + col) % 2 == 1
}

pub(crate) fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}

pub(crate) fn square_index(row: i32, col: i32) -> usize {
    (row as usize) * BOARD_SIZE + col as usize
}

fn bit(pos: usize) -> u64 {
    if pos < NUM_SQUARES { 1u64 << pos } else { 0 }
}
