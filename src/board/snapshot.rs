//! Raw board data supplied by external collaborators.
//!
//! A [`BoardSnapshot`] carries exactly what the wire format carries: 81 tile
//! values, the forced-sub-board index, and the mover identity. Derived fields
//! (sub-board statuses, win counters) are never transmitted; reconstruction
//! recomputes them from the tiles.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::board::{Board, SubBoardStatus, ANY_SUB_BOARD};
use crate::core::Player;

/// Malformed raw board data, rejected at reconstruction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("tile ({sub_board}, {tile}) holds {value}, expected 1, -1 or 0")]
    InvalidTile {
        sub_board: usize,
        tile: usize,
        value: i8,
    },

    #[error("player identity {0} is not 1 (black) or -1 (white)")]
    InvalidPlayer(i8),

    #[error("forced sub-board {0} is outside -1..=8")]
    ForcedSubBoardOutOfRange(i8),

    #[error("forced sub-board {0} is not open")]
    ForcedSubBoardNotOpen(i8),
}

/// Raw tile/forced-square/mover data for one position.
///
/// This is the transmission shape request-handling collaborators build a
/// [`Board`] from, and what [`Board::snapshot`] produces back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// `tiles[sub_board][tile]`, each 1 (black), -1 (white) or 0 (empty).
    pub tiles: [[i8; 9]; 9],
    /// Sub-board the mover must play in; -1 for free choice.
    pub forced_sub_board: i8,
    /// Identity of the player to move: 1 or -1.
    pub current_player: i8,
}

impl BoardSnapshot {
    /// Snapshot of the canonical starting position.
    #[must_use]
    pub fn starting_position() -> Self {
        Self {
            tiles: [[0; 9]; 9],
            forced_sub_board: ANY_SUB_BOARD,
            current_player: Player::Black.identity(),
        }
    }
}

impl Board {
    /// Reconstruct a board from raw data, recomputing every derived field.
    ///
    /// Tile values, the mover identity, and the forced index are validated
    /// against the wire encoding; the forced sub-board, when set, must be
    /// open after statuses are recomputed.
    pub fn from_snapshot(snapshot: &BoardSnapshot) -> Result<Board, SnapshotError> {
        let current_player = Player::from_identity(snapshot.current_player)
            .ok_or(SnapshotError::InvalidPlayer(snapshot.current_player))?;
        if !(ANY_SUB_BOARD..=8).contains(&snapshot.forced_sub_board) {
            return Err(SnapshotError::ForcedSubBoardOutOfRange(
                snapshot.forced_sub_board,
            ));
        }

        let mut tiles = [None; 81];
        for (s, row) in snapshot.tiles.iter().enumerate() {
            for (t, &value) in row.iter().enumerate() {
                tiles[s * 9 + t] = match value {
                    0 => None,
                    _ => Some(Player::from_identity(value).ok_or(
                        SnapshotError::InvalidTile {
                            sub_board: s,
                            tile: t,
                            value,
                        },
                    )?),
                };
            }
        }

        let board = Board::from_parts(tiles, snapshot.forced_sub_board, current_player);
        if board.forced_sub_board() != ANY_SUB_BOARD
            && board.sub_board_status(board.forced_sub_board() as usize) != SubBoardStatus::Open
        {
            return Err(SnapshotError::ForcedSubBoardNotOpen(
                board.forced_sub_board(),
            ));
        }
        Ok(board)
    }

    /// Raw data for this board, suitable for transmission.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        let mut tiles = [[0i8; 9]; 9];
        for (s, row) in tiles.iter_mut().enumerate() {
            for (t, value) in row.iter_mut().enumerate() {
                *value = self.tile(s, t).map_or(0, Player::identity);
            }
        }
        BoardSnapshot {
            tiles,
            forced_sub_board: self.forced_sub_board(),
            current_player: self.current_player().identity(),
        }
    }
}
