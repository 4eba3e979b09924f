//! Monte Carlo Tree Search decider for TEN boards.
//!
//! ## Shape of the algorithm
//!
//! This is the search the game ships with, kept exactly:
//!
//! - **Full one-ply batch expansion**: a selected node gets a child for
//!   *every* legal move at once, each seeded with one random playout, run in
//!   parallel. Not the canonical single-child expansion; the front-loaded
//!   vote changes convergence behavior on purpose.
//! - **Perspective-alternating UCB1**: selection maximizes the player's win
//!   probability at the root's children and the opponent's one level down,
//!   alternating all the way.
//! - **Terminal weighting**: a terminal position reached by selection
//!   backpropagates a fixed large weight so a proven result drowns out
//!   rollout noise.
//! - **Best-ratio decision**: the final move is the root child with the
//!   highest win ratio, not the most visited one. High-variance by design.
//!
//! ## Usage
//!
//! ```rust
//! use ten_engine::board::Board;
//! use ten_engine::mcts::{MctsSearch, SearchConfig};
//!
//! let board = Board::new();
//! let config = SearchConfig::default().with_time_budget_ms(100);
//!
//! let mut search = MctsSearch::new(config);
//! let decision = search.decide(&board).unwrap();
//! println!("{} at {}%", decision.mv, decision.win_percentage);
//! ```

pub mod config;
pub mod node;
pub mod search;
pub mod stats;
pub mod tree;

pub use config::SearchConfig;
pub use node::{NodeId, SearchNode};
pub use search::{decide, Decision, MctsSearch, SearchError};
pub use stats::SearchStats;
pub use tree::SearchTree;
