//! Board state, game rules, and the external data boundary.

pub mod board;
pub mod moves;
pub mod snapshot;

pub use board::{Board, MoveList, SubBoardStatus, ANY_SUB_BOARD};
pub use moves::Move;
pub use snapshot::{BoardSnapshot, SnapshotError};
