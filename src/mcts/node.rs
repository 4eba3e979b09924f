//! Search tree nodes.
//!
//! Nodes live in an index arena owned by [`SearchTree`](super::tree::SearchTree).
//! Parent links are plain ids, so backpropagation walks upward without shared
//! ownership or reference cycles.

use smallvec::SmallVec;

use crate::board::{Board, Move};

/// Index into the search tree's node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node in the search tree.
///
/// The board snapshot is retained only while the node is unexpanded;
/// expansion hands each child its own successor board and releases the
/// parent's copy to bound peak memory. `win_sum` over `visits` estimates the
/// probability that the searching player wins through this node.
#[derive(Clone, Debug)]
pub struct SearchNode {
    /// Parent node (NONE for the root).
    pub parent: NodeId,

    /// Move that produced this node (`Move::NONE` for the root).
    pub mv: Move,

    /// Position snapshot, dropped once the node is expanded.
    pub board: Option<Board>,

    /// Child nodes, attached in one batch on expansion.
    pub children: SmallVec<[NodeId; 9]>,

    /// Accumulated win weight of rollouts through this node.
    pub win_sum: u64,

    /// Accumulated visit weight.
    pub visits: u64,
}

impl SearchNode {
    /// Create a child node seeded with one rollout outcome.
    pub fn new(parent: NodeId, mv: Move, board: Board, win_sum: u64, visits: u64) -> Self {
        Self {
            parent,
            mv,
            board: Some(board),
            children: SmallVec::new(),
            win_sum,
            visits,
        }
    }

    /// Create a root node for a fresh search.
    pub fn root(board: Board) -> Self {
        Self::new(NodeId::NONE, Move::NONE, board, 0, 0)
    }

    /// Estimated win probability for the searching player.
    #[must_use]
    pub fn win_probability(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.win_sum as f64 / self.visits as f64
        }
    }

    /// Perspective-adjusted upper confidence bound for selection.
    ///
    /// `favors_player` says whether this tree level maximizes for the
    /// searching player or for the opponent; on opponent levels the win
    /// probability is inverted. `exploration` scales the uncertainty term.
    ///
    /// Undefined on the root; calling it there is a programming error and
    /// panics.
    #[must_use]
    pub fn upper_confidence_bound(
        &self,
        parent_visits: u64,
        favors_player: bool,
        exploration: f64,
    ) -> f64 {
        assert!(
            !self.parent.is_none(),
            "upper confidence bound is undefined on the root"
        );
        let p = self.win_probability();
        let perspective = if favors_player { p } else { 1.0 - p };
        let ln_parent = (parent_visits as f64).ln();
        perspective + (2.0 * ln_parent / self.visits as f64).sqrt() * exploration
    }

    /// Drop the board snapshot once the node has been expanded.
    pub fn release_board(&mut self) {
        self.board = None;
    }
}
