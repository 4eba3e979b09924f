//! Search diagnostics.

use serde::{Deserialize, Serialize};

/// Counters collected over one decision.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Total rollout weight. A terminal position hit by selection counts at
    /// the configured terminal weight; a batch expansion counts one per
    /// child.
    pub rollouts: u64,

    /// Expansion batches completed.
    pub batches: u64,

    /// Terminal positions reached by selection.
    pub terminal_hits: u64,

    /// Wall-clock time spent searching, in microseconds.
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Rollout weight per second of search.
    #[must_use]
    pub fn rollouts_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.rollouts as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
