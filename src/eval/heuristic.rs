//! Goal-distance leaf heuristic.
//!
//! Scores a position for one side by how close its pieces are to the goal
//! region on average. Used directly at freshly expanded search nodes; there
//! is no random playout.

use crate::board::{BoardState, GoalRegion, Side};

/// Mean over `side`'s pieces of the minimum hex distance to the goal region.
///
/// `None` if the side has no pieces or the region is empty.
pub fn mean_goal_distance(state: &BoardState, side: Side, goal: &GoalRegion) -> Option<f64> {
    let mut total = 0u64;
    let mut count = 0u64;
    for hex in state.pieces(side) {
        total += goal.distance_from(hex)? as u64;
        count += 1;
    }
    if count == 0 {
        return None;
    }
    Some(total as f64 / count as f64)
}

/// Reward in `(0, 1]`: `1 / (1 + mean distance)`. A side with no pieces
/// scores 0.
pub fn goal_distance_reward(state: &BoardState, side: Side, goal: &GoalRegion) -> f64 {
    match mean_goal_distance(state, side, goal) {
        Some(mean) => 1.0 / (1.0 + mean),
        None => 0.0,
    }
}
