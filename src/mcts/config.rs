//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// MCTS engine parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Wall-clock budget per decision, in milliseconds.
    ///
    /// Checked between cycles only; an in-flight expansion batch always
    /// completes, so actual usage may overshoot by up to one batch.
    pub time_budget_ms: u64,

    /// Multiplier on the exploration term of the confidence bound.
    pub exploration_constant: f64,

    /// Seed for the rollout RNG. Same seed produces the same fork sequence.
    pub seed: u64,

    /// Backpropagation weight of a terminal position reached by selection.
    /// Large enough to dominate single-rollout noise.
    pub terminal_weight: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            time_budget_ms: 1500,
            exploration_constant: 1.0,
            seed: 42,
            terminal_weight: 10_000,
        }
    }
}

impl SearchConfig {
    /// Create a config with a custom time budget.
    pub fn with_time_budget_ms(mut self, millis: u64) -> Self {
        self.time_budget_ms = millis;
        self
    }

    /// Create a config with a custom exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Create a config with a custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
