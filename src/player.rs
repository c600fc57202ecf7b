//! Player facade.
//!
//! Binds a strategy, a side and that side's goal region behind one
//! `propose(board)` call. The caller owns the authoritative board; the player
//! searches on its own copy and hands back a move for the caller to apply.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::warn;

use crate::board::{BoardState, GoalRegion, Move, Side};
use crate::movegen::is_legal;
use crate::search::{search, SearchConfig, SearchError, SearchReport, Strategy};

pub struct Player {
    name: String,
    side: Side,
    goal: GoalRegion,
    strategy: Strategy,
    config: SearchConfig,
    rng: SmallRng,
}

impl Player {
    /// Create a player. Tree-search strategies reject an unusable config here
    /// so that `propose` cannot fail later. `seed = None` seeds from entropy.
    pub fn new(
        name: impl Into<String>,
        side: Side,
        goal: GoalRegion,
        strategy: Strategy,
        config: SearchConfig,
        seed: Option<u64>,
    ) -> Result<Self, SearchError> {
        if strategy.is_tree_search() {
            config.validate()?;
        }
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Ok(Player {
            name: name.into(),
            side,
            goal,
            strategy,
            config,
            rng,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Move to play on `board`, or `None` if this side has no legal move.
    pub fn propose(&mut self, board: &BoardState) -> Option<Move> {
        match self.search(board) {
            Ok(report) => report.best,
            Err(e) => {
                warn!(player = %self.name, error = %e, "search failed");
                None
            }
        }
    }

    /// Run the strategy and return the full report.
    pub fn search(&mut self, board: &BoardState) -> Result<SearchReport, SearchError> {
        search(
            self.strategy,
            board,
            self.side,
            &self.goal,
            &self.config,
            &mut self.rng,
        )
    }

    /// Pieces of this side standing in its goal region.
    pub fn count_owned_in_goal(&self, board: &BoardState) -> usize {
        self.goal.count_owned(board, self.side)
    }

    pub fn has_won(&self, board: &BoardState, win_threshold: usize) -> bool {
        self.count_owned_in_goal(board) >= win_threshold
    }

    /// Whether this side may play `mv`. Used to check moves that did not come
    /// from `propose`.
    pub fn validate_move(&self, board: &BoardState, mv: Move) -> bool {
        is_legal(mv, board, self.side)
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("side", &self.side)
            .field("strategy", &self.strategy)
            .field("config", &self.config)
            .finish()
    }
}
