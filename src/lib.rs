//! Sternhalma engine library.
//!
//! Exposes the hex board, jump-only move generation, the goal-distance
//! heuristic, UCT/RAVE/GRAVE search and the player facade, plus a headless
//! match runner used by the `selfplay` binary and integration tests.

pub mod board;
pub mod config;
pub mod eval;
pub mod movegen;
pub mod player;
pub mod search;
pub mod selfplay;

pub use board::{build_board, BoardConfig, BoardState, GoalRegion, Hex, Move, Setup, Side};
pub use player::Player;
pub use search::{SearchConfig, SearchError, SearchReport, Strategy};
