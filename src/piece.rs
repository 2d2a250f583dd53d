use serde::Serialize;

use crate::types::Side;

/// A draughts piece. The side is fixed; promotion is one-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Piece {
    side: Side,
    promoted: bool,
}

impl Piece {
    /// Creates an unpromoted man.
    pub const fn man(side: Side) -> Self {
        Self {
            side,
            promoted: false,
        }
    }

    pub const fn king(side: Side) -> Self {
        Self {
            side,
            promoted: true,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn promoted(&self) -> bool {
        self.promoted
    }

    pub fn promote(&mut self) {
        self.promoted = true;
    }

    /// Material weight used by the static evaluation.
    pub(crate) fn weight(&self) -> i32 {
        if self.promoted { 2 } else { 1 }
    }
}
