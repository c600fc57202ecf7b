//! Move-selection strategies behind one dispatch point.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::{BoardState, GoalRegion, Side};
use crate::movegen::random_move;

use super::config::{SearchConfig, SearchError};
use super::mcts::{grave_search, rave_search, uct_search, SearchReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Uniformly random legal move. Ignores the simulation budget.
    Random,
    Uct,
    Rave,
    Grave,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Random,
        Strategy::Uct,
        Strategy::Rave,
        Strategy::Grave,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Random => "random",
            Strategy::Uct => "uct",
            Strategy::Rave => "rave",
            Strategy::Grave => "grave",
        }
    }

    /// Whether the strategy spends a simulation budget.
    pub fn is_tree_search(self) -> bool {
        !matches!(self, Strategy::Random)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Choose a move for `side` with `strategy`.
pub fn search<R: Rng>(
    strategy: Strategy,
    state: &BoardState,
    side: Side,
    goal: &GoalRegion,
    config: &SearchConfig,
    rng: &mut R,
) -> Result<SearchReport, SearchError> {
    match strategy {
        Strategy::Random => Ok(random_report(state, side, rng)),
        Strategy::Uct => uct_search(state, side, goal, config, rng),
        Strategy::Rave => rave_search(state, side, goal, config, rng),
        Strategy::Grave => grave_search(state, side, goal, config, rng),
    }
}

fn random_report<R: Rng>(state: &BoardState, side: Side, rng: &mut R) -> SearchReport {
    SearchReport {
        best: random_move(state, side, rng),
        simulations: 0,
        nodes: 0,
        root_visits: 0,
        root_mean: 0.0,
    }
}
