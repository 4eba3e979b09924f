//! # ten-engine
//!
//! An Ultimate Tic-Tac-Toe ("TEN") rules engine with a parallel MCTS
//! decider.
//!
//! ## Design Principles
//!
//! 1. **Immutable boards**: applying a move produces a new [`Board`];
//!    snapshots are never mutated, so they are safe to share across
//!    concurrent rollouts.
//!
//! 2. **One rule, two levels**: the same eight-line win test resolves a 3x3
//!    sub-board from its tiles and the whole game from its sub-board
//!    statuses.
//!
//! 3. **Deterministic randomness**: the search owns a seeded, forkable RNG;
//!    every parallel rollout task gets an independent fork.
//!
//! 4. **Nothing persists between decisions**: each call to
//!    [`MctsSearch::decide`] builds a fresh tree and discards it.
//!
//! ## Modules
//!
//! - `core`: player marks, deterministic RNG
//! - `board`: moves, the immutable rules engine, raw snapshot boundary
//! - `mcts`: the time-budgeted Monte Carlo Tree Search decider

pub mod board;
pub mod core;
pub mod mcts;

// Re-export commonly used types
pub use crate::core::{Player, SearchRng};

pub use crate::board::{Board, BoardSnapshot, Move, MoveList, SnapshotError, SubBoardStatus, ANY_SUB_BOARD};

pub use crate::mcts::{
    decide, Decision, MctsSearch, NodeId, SearchConfig, SearchError, SearchNode, SearchStats,
    SearchTree,
};
