//! The MCTS decider.
//!
//! One decision builds one tree. Cycles of selection, one-ply batch
//! expansion (one random playout per new child, fanned out across the rayon
//! pool), and weighted backpropagation run until the wall-clock budget
//! elapses; the tree is then scanned once for the answer and discarded.

use std::time::{Duration, Instant};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

use super::config::SearchConfig;
use super::node::{NodeId, SearchNode};
use super::stats::SearchStats;
use super::tree::SearchTree;
use crate::board::{Board, Move};
use crate::core::{Player, SearchRng};

/// Errors from [`MctsSearch::decide`].
#[derive(Debug, Error)]
pub enum SearchError {
    /// The input board has no legal moves; there is nothing to decide.
    #[error("no legal moves: the board is terminal")]
    NoLegalMoves,
}

/// The engine's answer for one position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Chosen move.
    pub mv: Move,

    /// Estimated win probability for the mover, floored to a percentage.
    pub win_percentage: u8,

    /// Total rollout weight behind the decision.
    pub rollouts: u64,
}

/// Monte Carlo Tree Search engine.
///
/// Owns configuration, RNG, and diagnostics across calls; the search tree is
/// rebuilt from scratch for every decision and nothing else persists between
/// them. The root's mover is "the player" for the whole search: every
/// probability is from that player's perspective.
pub struct MctsSearch {
    config: SearchConfig,
    rng: SearchRng,
    stats: SearchStats,
}

impl MctsSearch {
    /// Create a new engine.
    pub fn new(config: SearchConfig) -> Self {
        let rng = SearchRng::new(config.seed);
        Self {
            config,
            rng,
            stats: SearchStats::default(),
        }
    }

    /// Pick a move for the player to act on `board`.
    ///
    /// Runs at least one full cycle, so the rollout count is strictly
    /// positive on success. A board with no legal moves is a caller error
    /// and fails fast without searching.
    pub fn decide(&mut self, board: &Board) -> Result<Decision, SearchError> {
        if board.legal_moves().is_empty() {
            return Err(SearchError::NoLegalMoves);
        }

        let root_player = board.current_player();
        let start = Instant::now();
        let budget = Duration::from_millis(self.config.time_budget_ms);
        self.stats.reset();

        let mut tree = SearchTree::new(board.clone());
        loop {
            let selected = Self::select(&tree, self.config.exploration_constant);
            self.expand(&mut tree, selected, root_player);
            if start.elapsed() >= budget {
                break;
            }
        }
        self.stats.time_us = start.elapsed().as_micros() as u64;

        let decision = Self::best_move(&tree, self.stats.rollouts);
        debug!(
            mv = %decision.mv,
            win_percentage = decision.win_percentage,
            rollouts = decision.rollouts,
            batches = self.stats.batches,
            "search complete"
        );
        Ok(decision)
    }

    /// Descend from the root to a node with no children.
    ///
    /// Each level picks the child with the best confidence bound, flipping
    /// the perspective between levels: the root's children are maximized for
    /// the player, the next level for the opponent, and so on.
    fn select(tree: &SearchTree, exploration: f64) -> NodeId {
        let mut current = tree.root();
        let mut favors_player = true;
        loop {
            let node = tree.get(current);
            if node.children.is_empty() {
                return current;
            }
            let parent_visits = node.visits;

            let mut best = node.children[0];
            let mut best_bound = f64::NEG_INFINITY;
            for &child_id in &node.children {
                let bound = tree.get(child_id).upper_confidence_bound(
                    parent_visits,
                    favors_player,
                    exploration,
                );
                if bound > best_bound {
                    best_bound = bound;
                    best = child_id;
                }
            }

            favors_player = !favors_player;
            current = best;
        }
    }

    /// Expand the selected node and backpropagate the batch outcome.
    ///
    /// A terminal position gets the fixed terminal weight instead of
    /// children. Otherwise every legal move becomes a child carrying its own
    /// board and one random playout outcome, attached in a single batch.
    fn expand(&mut self, tree: &mut SearchTree, selected: NodeId, root_player: Player) {
        let board = tree
            .get(selected)
            .board
            .clone()
            .expect("unexpanded node retains its board");
        let moves = board.legal_moves();

        if moves.is_empty() {
            // Terminal position found by selection: weight it far above
            // rollout noise so the proven result dominates the branch.
            let won = board.game_status() == Some(root_player);
            let weight = self.config.terminal_weight;
            tree.backpropagate(selected, if won { weight } else { 0 }, weight);
            self.stats.rollouts += weight;
            self.stats.terminal_hits += 1;
            trace!(node = selected.index(), won, "terminal backpropagation");
            return;
        }

        // Full one-ply expansion: one child and one playout per legal move.
        // Forks are taken on the control thread so each task owns an
        // independently seeded generator.
        tree.get_mut(selected).release_board();
        let rngs: Vec<SearchRng> = moves.iter().map(|_| self.rng.fork()).collect();
        let outcomes: Vec<(Move, Board, u64)> = moves
            .as_slice()
            .par_iter()
            .zip(rngs)
            .map(|(&mv, mut rng)| {
                let child_board = board.apply_unchecked(mv);
                let outcome = rollout(&child_board, root_player, &mut rng);
                (mv, child_board, outcome)
            })
            .collect();

        let mut win_count = 0;
        let child_count = outcomes.len() as u64;
        for (mv, child_board, outcome) in outcomes {
            win_count += outcome;
            let child_id = tree.alloc(SearchNode::new(selected, mv, child_board, outcome, 1));
            tree.get_mut(selected).children.push(child_id);
        }
        tree.backpropagate(selected, win_count, child_count);
        self.stats.rollouts += child_count;
        self.stats.batches += 1;
    }

    /// Pick the root child with the best win ratio.
    ///
    /// Ratio-based, not visit-based: a small sample with a lucky first pass
    /// can outrank a heavily visited child. That is the shipped behavior of
    /// this engine, kept deliberately.
    fn best_move(tree: &SearchTree, rollouts: u64) -> Decision {
        let root = tree.root_node();
        let best = root
            .children
            .iter()
            .copied()
            .max_by(|&a, &b| {
                tree.get(a)
                    .win_probability()
                    .partial_cmp(&tree.get(b).win_probability())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .expect("root is expanded before the budget elapses");

        let chosen = tree.get(best);
        Decision {
            mv: chosen.mv,
            win_percentage: (chosen.win_probability() * 100.0) as u8,
            rollouts,
        }
    }

    /// Diagnostics for the most recent decision.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

/// One-shot decision with default parameters and the given budget.
pub fn decide(board: &Board, time_budget_ms: u64) -> Result<Decision, SearchError> {
    let config = SearchConfig::default().with_time_budget_ms(time_budget_ms);
    MctsSearch::new(config).decide(board)
}

/// Play uniformly random moves from `board` until the game is decided.
///
/// Returns 1 when the terminal status equals `root_player`, else 0. No
/// heuristic guidance; positions with no decisive status always have at
/// least one legal move, so the sampling below cannot come up empty.
fn rollout(board: &Board, root_player: Player, rng: &mut SearchRng) -> u64 {
    let mut current = board.clone();
    let mut status = current.game_status();
    while status.is_none() {
        let moves = current.legal_moves();
        let mv = moves[rng.gen_range_usize(0..moves.len())];
        current = current.apply_unchecked(mv);
        status = current.game_status();
    }
    u64::from(status == Some(root_player))
}
