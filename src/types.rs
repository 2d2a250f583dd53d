use std::fmt;

use serde::Serialize;

use crate::moves::Move;

/// One of the two players. Light moves first and advances toward row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Light,
    Dark,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Row delta of a forward step.
    pub fn forward(self) -> i32 {
        match self {
            Self::Light => -1,
            Self::Dark => 1,
        }
    }

    /// Row on which a man of this side is promoted.
    pub fn far_row(self) -> i32 {
        match self {
            Self::Light => 0,
            Self::Dark => 7,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Dark => f.write_str("dark"),
        }
    }
}

/// A board coordinate. Row 0 is the top (dark's home row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub(crate) fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    pub(crate) fn from_index(idx: usize) -> Self {
        Self::new((idx / 8) as u8, (idx % 8) as u8)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Terminal status of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    DarkWins,
    LightWins,
    Ongoing,
}

impl Outcome {
    /// Exchange code used by the presentation layer:
    /// `1` light wins, `-1` dark wins, `2` ongoing.
    pub fn code(self) -> i8 {
        match self {
            Self::LightWins => 1,
            Self::DarkWins => -1,
            Self::Ongoing => 2,
        }
    }

    pub fn is_over(self) -> bool {
        self != Self::Ongoing
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            Self::LightWins => Some(Side::Light),
            Self::DarkWins => Some(Side::Dark),
            Self::Ongoing => None,
        }
    }
}

impl Serialize for Outcome {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.code())
    }
}

/// Public game state returned from the adapter and the WASM API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Row-major cell codes: 0 empty, 1 light man, 2 dark man,
    /// 3 light king, 4 dark king.
    pub board: Vec<u8>,
    pub side_to_move: Side,
    pub light_count: u8,
    pub dark_count: u8,
    pub outcome: Outcome,
    pub last_move: Option<Move>,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub winner: Option<Side>,
    pub light_count: u8,
    pub dark_count: u8,
}
