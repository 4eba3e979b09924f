//! The move value type.

use serde::{Deserialize, Serialize};

/// A move at `(sub_board, tile)`, both in `[0, 8]`.
///
/// [`Move::NONE`] is the placeholder used where no move applies: the root of
/// a search tree, or an illegal-move response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Index of the 3x3 sub-board, 0..=8.
    pub sub_board: i8,
    /// Index of the tile within the sub-board, 0..=8.
    pub tile: i8,
}

impl Move {
    /// Sentinel value representing no move.
    pub const NONE: Move = Move {
        sub_board: -1,
        tile: -1,
    };

    /// Create a new move.
    #[must_use]
    pub const fn new(sub_board: i8, tile: i8) -> Self {
        Self { sub_board, tile }
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.sub_board < 0 || self.tile < 0
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "Move(NONE)")
        } else {
            write!(f, "Move({}, {})", self.sub_board, self.tile)
        }
    }
}
