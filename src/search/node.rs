//! Search tree node representation.
//!
//! Each node owns a snapshot of the board reached by playing `mv` from its
//! parent, the visit/reward statistics used for selection, and an AMAF table
//! keyed by move.

use std::collections::HashMap;

use crate::board::{BoardState, Move, Side};
use crate::movegen::all_moves;

/// Index into the node arena. The root is always `NodeId(0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// All-moves-as-first statistics for one move.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AmafStats {
    pub visits: u32,
    pub total_reward: f64,
}

impl AmafStats {
    /// Mean AMAF reward, 0 when unvisited.
    #[inline]
    pub fn mean(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.total_reward / self.visits as f64
        }
    }
}

/// A node in the search tree.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Board after `mv` was played.
    pub state: BoardState,

    /// Parent node (None for the root). Navigation only: the arena owns nodes.
    pub parent: Option<NodeId>,

    /// Children in creation order.
    pub children: Vec<NodeId>,

    /// Move that produced this node from its parent (None for the root).
    pub mv: Option<Move>,

    pub visits: u32,
    pub total_reward: f64,

    /// AMAF statistics for every move played below this node.
    pub amaf: HashMap<Move, AmafStats>,

    /// Candidate moves for the searching side, computed on first query and
    /// then frozen.
    candidates: Option<Vec<Move>>,
}

impl SearchNode {
    pub fn new_root(state: BoardState) -> Self {
        SearchNode {
            state,
            parent: None,
            children: Vec::new(),
            mv: None,
            visits: 0,
            total_reward: 0.0,
            amaf: HashMap::new(),
            candidates: None,
        }
    }

    pub fn new_child(parent: NodeId, mv: Move, state: BoardState) -> Self {
        SearchNode {
            parent: Some(parent),
            mv: Some(mv),
            ..SearchNode::new_root(state)
        }
    }

    /// Mean reward, 0 when unvisited.
    #[inline]
    pub fn mean_reward(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.total_reward / self.visits as f64
        }
    }

    /// AMAF statistics for `mv`, zero if never recorded.
    #[inline]
    pub fn amaf_stats(&self, mv: Move) -> AmafStats {
        self.amaf.get(&mv).copied().unwrap_or_default()
    }

    pub fn record_amaf(&mut self, mv: Move, reward: f64) {
        let entry = self.amaf.entry(mv).or_default();
        entry.visits += 1;
        entry.total_reward += reward;
    }

    pub fn update(&mut self, reward: f64) {
        self.visits += 1;
        self.total_reward += reward;
    }

    /// Legal moves for `side` from this node's board. Computed once; later
    /// calls return the cached list even if asked for another side.
    pub fn candidate_moves(&mut self, side: Side) -> &[Move] {
        let state = &self.state;
        self.candidates.get_or_insert_with(|| all_moves(state, side))
    }

    /// True once a child exists for every candidate move. A count comparison
    /// against the frozen candidate list.
    pub fn is_fully_expanded(&mut self, side: Side) -> bool {
        let children = self.children.len();
        children >= self.candidate_moves(side).len()
    }
}
