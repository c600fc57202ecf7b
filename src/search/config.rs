//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Errors raised before a search starts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    #[error("simulation budget is zero: no move can be chosen")]
    EmptyBudget,

    #[error("exploration constant must be finite and non-negative, got {0}")]
    InvalidExploration(f64),

    #[error("AMAF epsilon must be finite and positive, got {0}")]
    InvalidEpsilon(f64),
}

/// Configuration for one tree search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Number of select/expand/evaluate/backup cycles per decision.
    pub simulations: u32,

    /// Exploration constant `C` in the UCT bonus.
    pub exploration: f64,

    /// Small constant keeping the RAVE/GRAVE blend weight defined when a
    /// child and its AMAF entry are both unvisited.
    pub amaf_epsilon: f64,

    /// GRAVE only: minimum visits an ancestor needs before its AMAF table is
    /// used. 0 always uses the parent, like RAVE.
    pub grave_ref: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            simulations: 300,
            exploration: 1.4,
            amaf_epsilon: 1e-6,
            grave_ref: 0,
        }
    }
}

impl SearchConfig {
    /// Create a fast config for testing.
    pub fn for_testing() -> Self {
        SearchConfig {
            simulations: 60,
            ..Self::default()
        }
    }

    /// Builder pattern: set number of simulations.
    pub fn with_simulations(mut self, n: u32) -> Self {
        self.simulations = n;
        self
    }

    /// Builder pattern: set the exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration = c;
        self
    }

    /// Builder pattern: set the GRAVE reference threshold.
    pub fn with_grave_ref(mut self, min_visits: u32) -> Self {
        self.grave_ref = min_visits;
        self
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        if self.simulations == 0 {
            return Err(SearchError::EmptyBudget);
        }
        if !self.exploration.is_finite() || self.exploration < 0.0 {
            return Err(SearchError::InvalidExploration(self.exploration));
        }
        if !self.amaf_epsilon.is_finite() || self.amaf_epsilon <= 0.0 {
            return Err(SearchError::InvalidEpsilon(self.amaf_epsilon));
        }
        Ok(())
    }
}
