//! Search and planning.
//!
//! Builds an arena tree over the searching side's moves and picks the most
//! promising one, using plain UCT or the AMAF-blended RAVE/GRAVE variants.
//! A uniformly random policy serves as the baseline.

pub mod config;
pub mod mcts;
pub mod node;
pub mod select;
pub mod strategy;
pub mod tree;

pub use config::{SearchConfig, SearchError};
pub use mcts::{grave_search, is_terminal, rave_search, uct_search, Search, SearchReport};
pub use node::{AmafStats, NodeId, SearchNode};
pub use select::AmafMode;
pub use strategy::{search, Strategy};
pub use tree::SearchTree;
