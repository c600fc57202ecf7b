//! Position evaluation.
//!
//! Scores a board position from one side's perspective by the distance of its
//! pieces to the goal region.

pub mod heuristic;

pub use heuristic::{goal_distance_reward, mean_goal_distance};
