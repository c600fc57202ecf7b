//! Goal regions.
//!
//! A goal region is the fixed set of cells a side must fill to win. It is
//! built once per game and never recomputed. The minimum distance from every
//! board cell to the region is precomputed so the leaf heuristic is a table
//! lookup.

use std::sync::Arc;

use super::hex::Hex;
use super::layout::Layout;
use super::state::{BoardState, Side};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalRegion {
    layout: Arc<Layout>,
    cells: Vec<Hex>,
    member: Vec<bool>,
    /// Min hex distance from each layout cell to the region.
    distance: Vec<u32>,
}

impl GoalRegion {
    /// Builds a region from the given cells. Cells off the board are dropped.
    pub fn new(layout: Arc<Layout>, cells: impl IntoIterator<Item = Hex>) -> Self {
        let mut member = vec![false; layout.len()];
        for hex in cells {
            if let Some(i) = layout.index(hex) {
                member[i] = true;
            }
        }
        let cells: Vec<Hex> = layout
            .cells()
            .iter()
            .zip(&member)
            .filter(|(_, m)| **m)
            .map(|(h, _)| *h)
            .collect();

        let distance = layout
            .cells()
            .iter()
            .map(|&from| {
                cells
                    .iter()
                    .map(|&goal| from.distance(goal))
                    .min()
                    .unwrap_or(u32::MAX)
            })
            .collect();

        GoalRegion {
            layout,
            cells,
            member,
            distance,
        }
    }

    /// Region cells in layout order.
    pub fn cells(&self) -> &[Hex] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, hex: Hex) -> bool {
        matches!(self.layout.index(hex), Some(i) if self.member[i])
    }

    /// Minimum hex distance from `hex` to any goal cell.
    ///
    /// `None` if `hex` is off the board or the region is empty.
    #[inline]
    pub fn distance_from(&self, hex: Hex) -> Option<u32> {
        if self.cells.is_empty() {
            return None;
        }
        self.layout.index(hex).map(|i| self.distance[i])
    }

    /// Number of `side`'s pieces standing inside the region. This is the
    /// quantity the win threshold is compared against.
    pub fn count_owned(&self, state: &BoardState, side: Side) -> usize {
        state.pieces(side).filter(|h| self.contains(*h)).count()
    }

    /// True iff every piece of `side` is inside the region (vacuously true
    /// for a side with no pieces). Used as the search cutoff.
    pub fn all_home(&self, state: &BoardState, side: Side) -> bool {
        state.pieces(side).all(|h| self.contains(h))
    }
}
