//! Monte-Carlo tree search over one side's moves.
//!
//! One driver serves UCT, RAVE and GRAVE; they differ only in the
//! [`AmafMode`] used for selection and whether backup records AMAF
//! statistics. Each simulation descends with the tree policy, expands one
//! untried move, scores the new node with the goal-distance heuristic and
//! backs the reward up to the root. There is no random playout.
//!
//! The search is single-agent: every ply in the tree is a move of the
//! searching side and the opponent is treated as static.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, trace};

use crate::board::{BoardState, GoalRegion, Move, Side};
use crate::eval::goal_distance_reward;

use super::config::{SearchConfig, SearchError};
use super::node::NodeId;
use super::select::{best_child, AmafMode};
use super::tree::SearchTree;

/// Outcome of one search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    /// Chosen move, `None` only if the side had no legal move.
    pub best: Option<Move>,
    /// Simulations run.
    pub simulations: u32,
    /// Nodes in the tree when the search stopped, root included.
    pub nodes: usize,
    pub root_visits: u32,
    pub root_mean: f64,
}

/// Search cutoff: every piece of `side` is inside `goal`. Vacuously true for
/// a side with no pieces.
pub fn is_terminal(state: &BoardState, side: Side, goal: &GoalRegion) -> bool {
    goal.all_home(state, side)
}

/// Search state for one decision.
pub struct Search<'a, R: Rng> {
    tree: SearchTree,
    side: Side,
    goal: &'a GoalRegion,
    config: SearchConfig,
    mode: AmafMode,
    rng: &'a mut R,
    simulations: u32,
}

impl<'a, R: Rng> Search<'a, R> {
    pub fn new(
        state: &BoardState,
        side: Side,
        goal: &'a GoalRegion,
        config: SearchConfig,
        mode: AmafMode,
        rng: &'a mut R,
    ) -> Self {
        Search {
            tree: SearchTree::new(state.clone()),
            side,
            goal,
            config,
            mode,
            rng,
            simulations: 0,
        }
    }

    pub fn tree(&self) -> &SearchTree {
        &self.tree
    }

    /// Validate the config, run the full simulation budget and report.
    pub fn run(mut self) -> Result<SearchReport, SearchError> {
        self.config.validate()?;
        for _ in 0..self.config.simulations {
            self.simulate();
        }
        let report = self.report();
        debug!(
            side = %self.side,
            mode = ?self.mode,
            best = ?report.best,
            nodes = report.nodes,
            root_visits = report.root_visits,
            root_mean = report.root_mean,
            "search finished"
        );
        Ok(report)
    }

    /// One select/expand/evaluate/backup cycle.
    pub fn simulate(&mut self) {
        let leaf = self.tree_policy();
        let reward = goal_distance_reward(&self.tree.get(leaf).state, self.side, self.goal);
        self.backup(leaf, reward);
        self.simulations += 1;
    }

    /// Root child with the best exploitation-only score.
    pub fn best_move(&self) -> Option<Move> {
        best_child(&self.tree, self.tree.root(), 0.0, self.mode, self.config.amaf_epsilon)
            .and_then(|id| self.tree.get(id).mv)
    }

    pub fn report(&self) -> SearchReport {
        let root = self.tree.get(self.tree.root());
        SearchReport {
            best: self.best_move(),
            simulations: self.simulations,
            nodes: self.tree.len(),
            root_visits: root.visits,
            root_mean: root.mean_reward(),
        }
    }

    /// Descend from the root until reaching a terminal node, a node with an
    /// untried move (which is expanded), or a dead end. The root is always
    /// expanded, terminal or not, so a legal move is never withheld.
    fn tree_policy(&mut self) -> NodeId {
        let root = self.tree.root();
        let mut node = root;
        loop {
            if node != root && is_terminal(&self.tree.get(node).state, self.side, self.goal) {
                return node;
            }
            if !self.tree.get_mut(node).is_fully_expanded(self.side) {
                return self.expand(node).unwrap_or(node);
            }
            match best_child(
                &self.tree,
                node,
                self.config.exploration,
                self.mode,
                self.config.amaf_epsilon,
            ) {
                Some(child) => node = child,
                None => return node,
            }
        }
    }

    /// Add a child for one untried move chosen uniformly at random.
    fn expand(&mut self, node: NodeId) -> Option<NodeId> {
        let untried = self.tree.untried_moves(node, self.side);
        let mv = *untried.choose(&mut *self.rng)?;
        let child = self.tree.add_child(node, mv);
        trace!(%mv, parent = node.0, child = child.0, "expanded");
        Some(child)
    }

    /// Add `reward` to every node from `leaf` to the root. With AMAF enabled,
    /// every node on the path also records `reward` against each move played
    /// along the path.
    fn backup(&mut self, leaf: NodeId, reward: f64) {
        let path = self.tree.path_to_root(leaf);
        let played = if self.mode.uses_amaf() {
            self.tree.moves_on_path(&path)
        } else {
            Vec::new()
        };
        for id in path {
            let node = self.tree.get_mut(id);
            node.update(reward);
            for &mv in &played {
                node.record_amaf(mv, reward);
            }
        }
    }
}

/// Plain UCT search.
pub fn uct_search<R: Rng>(
    state: &BoardState,
    side: Side,
    goal: &GoalRegion,
    config: &SearchConfig,
    rng: &mut R,
) -> Result<SearchReport, SearchError> {
    Search::new(state, side, goal, *config, AmafMode::Off, rng).run()
}

/// RAVE: children scored with a blend of their own mean and the parent's
/// AMAF statistics.
pub fn rave_search<R: Rng>(
    state: &BoardState,
    side: Side,
    goal: &GoalRegion,
    config: &SearchConfig,
    rng: &mut R,
) -> Result<SearchReport, SearchError> {
    Search::new(state, side, goal, *config, AmafMode::Parent, rng).run()
}

/// GRAVE: like RAVE, but AMAF statistics come from the closest ancestor with
/// at least `config.grave_ref` visits.
pub fn grave_search<R: Rng>(
    state: &BoardState,
    side: Side,
    goal: &GoalRegion,
    config: &SearchConfig,
    rng: &mut R,
) -> Result<SearchReport, SearchError> {
    let mode = AmafMode::Reference {
        min_visits: config.grave_ref,
    };
    Search::new(state, side, goal, *config, mode, rng).run()
}
