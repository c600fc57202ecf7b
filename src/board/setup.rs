//! Initial position.
//!
//! Fills the top apex with side A and the bottom apex with side B. Each
//! side's goal region is the other side's starting apex.

use std::sync::Arc;

use super::goal::GoalRegion;
use super::layout::{BoardConfig, Layout, LayoutError};
use super::state::{BoardState, Side};

/// A freshly built game: the starting board and both goal regions.
#[derive(Debug, Clone)]
pub struct Setup {
    pub state: BoardState,
    /// Cells side A must fill (side B's starting apex).
    pub goal_a: GoalRegion,
    /// Cells side B must fill (side A's starting apex).
    pub goal_b: GoalRegion,
}

/// Builds the starting position for two sides.
pub fn build_board(config: BoardConfig, side_a: Side, side_b: Side) -> Result<Setup, LayoutError> {
    if side_a == side_b {
        return Err(LayoutError::SameSides);
    }
    let layout = Arc::new(Layout::new(config)?);
    let top = layout.top_apex();
    let bottom = layout.bottom_apex();

    let mut state = BoardState::empty(layout.clone());
    for &hex in &top {
        state.place(hex, side_a);
    }
    for &hex in &bottom {
        state.place(hex, side_b);
    }

    Ok(Setup {
        state,
        goal_a: GoalRegion::new(layout.clone(), bottom),
        goal_b: GoalRegion::new(layout, top),
    })
}
