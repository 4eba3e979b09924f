//! Player marks and their wire identity encoding.
//!
//! The two players are encoded on the wire as signed integers: black is +1,
//! white is -1, and an empty tile is 0. Black always moves first.

use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Moves first; wire identity +1.
    Black,
    /// Wire identity -1.
    White,
}

impl Player {
    /// Wire identity of this player: +1 for black, -1 for white.
    #[must_use]
    pub const fn identity(self) -> i8 {
        match self {
            Player::Black => 1,
            Player::White => -1,
        }
    }

    /// Decode a wire identity. Anything other than +1 or -1 is rejected.
    #[must_use]
    pub const fn from_identity(identity: i8) -> Option<Self> {
        match identity {
            1 => Some(Player::Black),
            -1 => Some(Player::White),
            _ => None,
        }
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_encoding() {
        assert_eq!(Player::Black.identity(), 1);
        assert_eq!(Player::White.identity(), -1);
    }

    #[test]
    fn test_from_identity() {
        assert_eq!(Player::from_identity(1), Some(Player::Black));
        assert_eq!(Player::from_identity(-1), Some(Player::White));
        assert_eq!(Player::from_identity(0), None);
        assert_eq!(Player::from_identity(2), None);
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(Player::White.opponent(), Player::Black);
        assert_eq!(Player::Black.opponent().opponent(), Player::Black);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Player::Black), "Black");
        assert_eq!(format!("{}", Player::White), "White");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Player::White).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Player::White);
    }
}
