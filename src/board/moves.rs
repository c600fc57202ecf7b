//! Move representation.

use serde::{Deserialize, Serialize};

use super::hex::Hex;

/// A single jump: the piece on `from` lands on `to`.
///
/// Moves are plain values and double as keys in AMAF statistics tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Hex,
    pub to: Hex,
}

impl Move {
    pub const fn new(from: Hex, to: Hex) -> Self {
        Move { from, to }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}
