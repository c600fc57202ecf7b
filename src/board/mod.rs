//! Board representation and geometry.
//!
//! Contains the hex coordinate system, the cell layout, occupancy state,
//! goal regions, and the initial-position builder.

pub mod goal;
pub mod hex;
pub mod layout;
pub mod moves;
pub mod setup;
pub mod state;

pub use goal::GoalRegion;
pub use hex::{Hex, AXES};
pub use layout::{BoardConfig, Layout, LayoutError, MAX_RADIUS};
pub use moves::Move;
pub use setup::{build_board, Setup};
pub use state::{BoardState, Side};
