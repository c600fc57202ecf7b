//! Arena-based search tree.
//!
//! Nodes live in a `Vec` and refer to each other by [`NodeId`], so parent
//! links are plain indices and the tree drops in one piece when the search
//! returns.

use crate::board::{BoardState, Move, Side};

use super::node::{NodeId, SearchNode};

/// Search tree with arena allocation.
#[derive(Debug, Clone)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    /// Create a tree whose root holds a copy of `state`.
    pub fn new(state: BoardState) -> Self {
        SearchTree {
            nodes: vec![SearchNode::new_root(state)],
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Play `mv` on a copy of `parent`'s board and append the resulting node.
    pub fn add_child(&mut self, parent: NodeId, mv: Move) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        let state = self.get(parent).state.with_move(mv);
        self.nodes.push(SearchNode::new_child(parent, mv, state));
        self.get_mut(parent).children.push(id);
        id
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.get(id).children
    }

    /// Candidate moves of `id` that no child has been created for yet, in
    /// candidate order.
    pub fn untried_moves(&mut self, id: NodeId, side: Side) -> Vec<Move> {
        let tried: Vec<Move> = self
            .children(id)
            .iter()
            .filter_map(|&child| self.get(child).mv)
            .collect();
        self.get_mut(id)
            .candidate_moves(side)
            .iter()
            .copied()
            .filter(|mv| !tried.contains(mv))
            .collect()
    }

    /// Node ids from `leaf` up to and including the root.
    pub fn path_to_root(&self, leaf: NodeId) -> Vec<NodeId> {
        let mut path = vec![leaf];
        let mut current = leaf;
        while let Some(parent) = self.get(current).parent {
            path.push(parent);
            current = parent;
        }
        path
    }

    /// Moves that produced the nodes on `path`, deduplicated, first occurrence
    /// kept.
    pub fn moves_on_path(&self, path: &[NodeId]) -> Vec<Move> {
        let mut moves: Vec<Move> = Vec::with_capacity(path.len());
        for &id in path {
            if let Some(mv) = self.get(id).mv {
                if !moves.contains(&mv) {
                    moves.push(mv);
                }
            }
        }
        moves
    }

    /// Depth of `id` below the root.
    pub fn depth(&self, id: NodeId) -> usize {
        self.path_to_root(id).len() - 1
    }
}
