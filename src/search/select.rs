//! Child selection: UCT and the AMAF-blended variants.

use super::node::{AmafStats, NodeId};
use super::tree::SearchTree;

/// Where a node looks up AMAF statistics when scoring its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmafMode {
    /// Plain UCT: AMAF statistics are neither kept nor used.
    Off,
    /// RAVE: the parent's own AMAF table.
    Parent,
    /// GRAVE: the closest ancestor (starting at the parent) with at least
    /// `min_visits` visits, falling back to the root.
    Reference { min_visits: u32 },
}

impl AmafMode {
    #[inline]
    pub fn uses_amaf(self) -> bool {
        !matches!(self, AmafMode::Off)
    }
}

/// `C * sqrt(ln(N + 1) / (n + 1))`.
#[inline]
pub fn exploration_bonus(parent_visits: u32, child_visits: u32, c: f64) -> f64 {
    c * ((parent_visits as f64 + 1.0).ln() / (child_visits as f64 + 1.0)).sqrt()
}

#[inline]
pub fn uct_score(mean: f64, child_visits: u32, parent_visits: u32, c: f64) -> f64 {
    mean + exploration_bonus(parent_visits, child_visits, c)
}

/// Blend weight of the child's own mean: `n / (n + amaf_n + epsilon)`.
#[inline]
pub fn blend_weight(child_visits: u32, amaf_visits: u32, epsilon: f64) -> f64 {
    let n = child_visits as f64;
    n / (n + amaf_visits as f64 + epsilon)
}

/// `beta * mean + (1 - beta) * amaf_mean`.
#[inline]
pub fn blended_value(mean: f64, child_visits: u32, amaf: AmafStats, epsilon: f64) -> f64 {
    let beta = blend_weight(child_visits, amaf.visits, epsilon);
    beta * mean + (1.0 - beta) * amaf.mean()
}

/// Node whose AMAF table scores `node`'s children under `mode`.
pub fn amaf_source(tree: &SearchTree, node: NodeId, mode: AmafMode) -> NodeId {
    match mode {
        AmafMode::Off | AmafMode::Parent => node,
        AmafMode::Reference { min_visits } => {
            let mut current = node;
            while tree.get(current).visits < min_visits {
                match tree.get(current).parent {
                    Some(parent) => current = parent,
                    None => break,
                }
            }
            current
        }
    }
}

/// Score of `child` as seen from its parent `node`.
pub fn child_score(
    tree: &SearchTree,
    node: NodeId,
    child: NodeId,
    source: NodeId,
    mode: AmafMode,
    c: f64,
    epsilon: f64,
) -> f64 {
    let parent_visits = tree.get(node).visits;
    let stats = tree.get(child);
    let value = match (mode, stats.mv) {
        (AmafMode::Off, _) | (_, None) => stats.mean_reward(),
        (_, Some(mv)) => {
            let amaf = tree.get(source).amaf_stats(mv);
            blended_value(stats.mean_reward(), stats.visits, amaf, epsilon)
        }
    };
    uct_score(value, stats.visits, parent_visits, c)
}

/// Highest-scoring child of `node`. Ties go to the earliest-created child.
/// `None` when `node` has no children.
pub fn best_child(
    tree: &SearchTree,
    node: NodeId,
    c: f64,
    mode: AmafMode,
    epsilon: f64,
) -> Option<NodeId> {
    let source = amaf_source(tree, node, mode);
    let mut best: Option<(NodeId, f64)> = None;
    for &child in tree.children(node) {
        let score = child_score(tree, node, child, source, mode, c, epsilon);
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((child, score)),
        }
    }
    best.map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{build_board, BoardConfig, Move, Side};

    const A: Side = Side(1);
    const B: Side = Side(2);
    const EPS: f64 = 1e-6;

    /// Root with two children, neither visited.
    fn two_child_tree() -> (SearchTree, NodeId, NodeId, Move, Move) {
        let setup = build_board(BoardConfig::default(), A, B).unwrap();
        let mut tree = SearchTree::new(setup.state);
        let root = tree.root();
        let moves = tree.untried_moves(root, A);
        let (m0, m1) = (moves[0], moves[1]);
        let c0 = tree.add_child(root, m0);
        let c1 = tree.add_child(root, m1);
        (tree, c0, c1, m0, m1)
    }

    #[test]
    fn uct_score_formula() {
        let score = uct_score(0.5, 3, 10, 1.4);
        let expected = 0.5 + 1.4 * ((11.0f64).ln() / 4.0).sqrt();
        assert!((score - expected).abs() < 1e-12);
        assert_eq!(uct_score(0.25, 0, 0, 1.4), 0.25, "ln(1) is zero");
    }

    #[test]
    fn plain_child_score_is_uct_of_its_mean() {
        let (mut tree, c0, _, _, _) = two_child_tree();
        let root = tree.root();
        tree.get_mut(root).visits = 10;
        for _ in 0..3 {
            tree.get_mut(c0).update(0.5);
        }
        let score = child_score(&tree, root, c0, root, AmafMode::Off, 1.4, EPS);
        assert_eq!(score, uct_score(0.5, 3, 10, 1.4));
    }

    #[test]
    fn blend_weight_bounds() {
        assert_eq!(blend_weight(0, 0, EPS), 0.0);
        assert_eq!(blend_weight(0, 50, EPS), 0.0);
        let w = blend_weight(10, 10, EPS);
        assert!(w > 0.49 && w < 0.5);
    }

    #[test]
    fn blended_value_converges_to_mean() {
        let amaf = AmafStats {
            visits: 20,
            total_reward: 20.0 * 0.9,
        };
        let mean = 0.1;
        let mut previous_gap = f64::INFINITY;
        for visits in [1u32, 10, 100, 10_000, 1_000_000] {
            let gap = (blended_value(mean, visits, amaf, EPS) - mean).abs();
            assert!(gap < previous_gap);
            previous_gap = gap;
        }
        assert!(previous_gap < 1e-4);
    }

    #[test]
    fn unvisited_child_relies_on_amaf() {
        let amaf = AmafStats {
            visits: 4,
            total_reward: 2.0,
        };
        assert!((blended_value(0.0, 0, amaf, EPS) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn zero_exploration_picks_highest_mean() {
        let (mut tree, c0, c1, _, _) = two_child_tree();
        tree.get_mut(tree.root()).visits = 10;
        tree.get_mut(c0).update(0.2);
        tree.get_mut(c1).update(0.7);
        assert_eq!(best_child(&tree, tree.root(), 0.0, AmafMode::Off, EPS), Some(c1));
    }

    #[test]
    fn ties_go_to_first_child() {
        let (tree, c0, _, _, _) = two_child_tree();
        assert_eq!(best_child(&tree, tree.root(), 1.4, AmafMode::Off, EPS), Some(c0));
        assert_eq!(best_child(&tree, tree.root(), 0.0, AmafMode::Parent, EPS), Some(c0));
    }

    #[test]
    fn exploration_favours_less_visited_child() {
        let (mut tree, c0, c1, _, _) = two_child_tree();
        tree.get_mut(tree.root()).visits = 100;
        for _ in 0..50 {
            tree.get_mut(c0).update(0.5);
        }
        tree.get_mut(c1).update(0.45);
        assert_eq!(best_child(&tree, tree.root(), 1.4, AmafMode::Off, EPS), Some(c1));
        assert_eq!(best_child(&tree, tree.root(), 0.0, AmafMode::Off, EPS), Some(c0));
    }

    #[test]
    fn rave_uses_parent_amaf_for_unvisited_children() {
        let (mut tree, c0, c1, _, m1) = two_child_tree();
        let root = tree.root();
        tree.get_mut(root).record_amaf(m1, 0.9);
        assert_eq!(best_child(&tree, root, 0.0, AmafMode::Parent, EPS), Some(c1));
        assert_eq!(best_child(&tree, root, 0.0, AmafMode::Off, EPS), Some(c0));
    }

    #[test]
    fn no_children_selects_nothing() {
        let setup = build_board(BoardConfig::default(), A, B).unwrap();
        let tree = SearchTree::new(setup.state);
        assert_eq!(best_child(&tree, tree.root(), 1.4, AmafMode::Off, EPS), None);
    }

    #[test]
    fn reference_walks_up_to_a_well_visited_ancestor() {
        let (mut tree, c0, _, _, _) = two_child_tree();
        let root = tree.root();
        let m = tree.untried_moves(c0, A)[0];
        let grandchild = tree.add_child(c0, m);
        tree.get_mut(root).visits = 40;
        tree.get_mut(c0).visits = 5;

        let mode = AmafMode::Reference { min_visits: 10 };
        assert_eq!(amaf_source(&tree, c0, mode), root);
        assert_eq!(amaf_source(&tree, grandchild, mode), root);
        let mode = AmafMode::Reference { min_visits: 5 };
        assert_eq!(amaf_source(&tree, grandchild, mode), c0);
        let mode = AmafMode::Reference { min_visits: 0 };
        assert_eq!(amaf_source(&tree, grandchild, mode), grandchild);
        // Nobody qualifies: fall back to the root.
        let mode = AmafMode::Reference { min_visits: 1000 };
        assert_eq!(amaf_source(&tree, grandchild, mode), root);
        assert_eq!(amaf_source(&tree, grandchild, AmafMode::Parent), grandchild);
    }

    #[test]
    fn grave_reads_ancestor_table() {
        let (mut tree, c0, _, _, _) = two_child_tree();
        let root = tree.root();
        let moves = tree.untried_moves(c0, A);
        let g0 = tree.add_child(c0, moves[0]);
        let g1 = tree.add_child(c0, moves[1]);
        tree.get_mut(root).visits = 50;
        tree.get_mut(c0).visits = 2;
        // Only the root has experience with the second move.
        tree.get_mut(root).record_amaf(moves[1], 1.0);

        let grave = AmafMode::Reference { min_visits: 10 };
        assert_eq!(best_child(&tree, c0, 0.0, grave, EPS), Some(g1));
        assert_eq!(best_child(&tree, c0, 0.0, AmafMode::Parent, EPS), Some(g0));
    }
}
