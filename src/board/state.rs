//! Board occupancy.
//!
//! Holds which side (if any) occupies each cell of a [`Layout`]. The layout is
//! shared behind an `Arc`, so cloning a state for a search branch copies only
//! the occupant array.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::hex::Hex;
use super::layout::Layout;
use super::moves::Move;

/// Opaque identifier of one of the two sides. Compared for equality only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Side(pub u8);

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "side-{}", self.0)
    }
}

/// Occupancy of every cell on the board.
///
/// Indexed by the layout's flat cell index for O(1) lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    layout: Arc<Layout>,
    cells: Vec<Option<Side>>,
}

impl BoardState {
    /// Creates a board with every cell empty.
    pub fn empty(layout: Arc<Layout>) -> Self {
        let cells = vec![None; layout.len()];
        BoardState { layout, cells }
    }

    pub fn layout(&self) -> &Arc<Layout> {
        &self.layout
    }

    /// Whether the coordinate is a cell of this board.
    pub fn contains(&self, hex: Hex) -> bool {
        self.layout.contains(hex)
    }

    /// The side on `hex`, or `None` if the cell is empty or off the board.
    #[inline]
    pub fn occupant(&self, hex: Hex) -> Option<Side> {
        self.layout.index(hex).and_then(|i| self.cells[i])
    }

    #[inline]
    pub fn is_occupied(&self, hex: Hex) -> bool {
        self.occupant(hex).is_some()
    }

    /// On the board and empty.
    #[inline]
    pub fn is_vacant(&self, hex: Hex) -> bool {
        matches!(self.layout.index(hex), Some(i) if self.cells[i].is_none())
    }

    /// Places a piece. Returns false if the cell is off the board or occupied.
    pub fn place(&mut self, hex: Hex, side: Side) -> bool {
        match self.layout.index(hex) {
            Some(i) if self.cells[i].is_none() => {
                self.cells[i] = Some(side);
                true
            }
            _ => false,
        }
    }

    /// Removes and returns the piece on `hex`, if any.
    pub fn remove(&mut self, hex: Hex) -> Option<Side> {
        self.layout.index(hex).and_then(|i| self.cells[i].take())
    }

    /// Coordinates occupied by `side`, in layout order.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = Hex> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, c)| **c == Some(side))
            .map(|(i, _)| self.layout.hex(i))
    }

    pub fn piece_count(&self, side: Side) -> usize {
        self.cells.iter().filter(|c| **c == Some(side)).count()
    }

    /// Every cell with its occupant, in layout order.
    pub fn cells(&self) -> impl Iterator<Item = (Hex, Option<Side>)> + '_ {
        self.layout.cells().iter().copied().zip(self.cells.iter().copied())
    }

    /// Moves whatever occupies `mv.from` onto `mv.to` and clears `mv.from`.
    ///
    /// Legality is not checked here; callers take moves from the move
    /// generator. Returns false (leaving the board untouched) if either
    /// endpoint is off the board.
    pub fn apply_move(&mut self, mv: Move) -> bool {
        match (self.layout.index(mv.from), self.layout.index(mv.to)) {
            (Some(from), Some(to)) => {
                let piece = self.cells[from].take();
                self.cells[to] = piece;
                true
            }
            _ => false,
        }
    }

    /// Returns a copy of this board with `mv` applied, leaving `self` untouched.
    pub fn with_move(&self, mv: Move) -> BoardState {
        let mut next = self.clone();
        next.apply_move(mv);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::layout::BoardConfig;

    const A: Side = Side(1);
    const B: Side = Side(2);

    fn empty_board() -> BoardState {
        BoardState::empty(Arc::new(Layout::new(BoardConfig::default()).unwrap()))
    }

    #[test]
    fn empty_board_has_no_pieces() {
        let state = empty_board();
        assert_eq!(state.piece_count(A), 0);
        assert!(state.cells().all(|(_, c)| c.is_none()));
    }

    #[test]
    fn place_rejects_occupied_and_off_board() {
        let mut state = empty_board();
        assert!(state.place(Hex::ORIGIN, A));
        assert!(!state.place(Hex::ORIGIN, B));
        assert!(!state.place(Hex::new(9, 9), A));
        assert_eq!(state.occupant(Hex::ORIGIN), Some(A));
        assert_eq!(state.occupant(Hex::new(9, 9)), None);
    }

    #[test]
    fn vacancy_requires_board_membership() {
        let state = empty_board();
        assert!(state.is_vacant(Hex::ORIGIN));
        assert!(!state.is_vacant(Hex::new(0, -9)));
    }

    #[test]
    fn apply_move_relocates_exactly_one_piece() {
        let mut state = empty_board();
        state.place(Hex::new(0, 0), A);
        state.place(Hex::new(1, 0), B);
        assert!(state.apply_move(Move::new(Hex::new(0, 0), Hex::new(2, 0))));
        assert_eq!(state.occupant(Hex::new(0, 0)), None);
        assert_eq!(state.occupant(Hex::new(2, 0)), Some(A));
        assert_eq!(state.occupant(Hex::new(1, 0)), Some(B));
        assert_eq!(state.piece_count(A), 1);
        assert_eq!(state.piece_count(B), 1);
    }

    #[test]
    fn apply_move_off_board_is_a_no_op() {
        let mut state = empty_board();
        state.place(Hex::ORIGIN, A);
        let before = state.clone();
        assert!(!state.apply_move(Move::new(Hex::ORIGIN, Hex::new(0, -12))));
        assert_eq!(state, before);
    }

    #[test]
    fn with_move_does_not_touch_the_original() {
        let mut state = empty_board();
        state.place(Hex::new(0, 0), A);
        let next = state.with_move(Move::new(Hex::new(0, 0), Hex::new(0, 2)));
        assert_eq!(state.occupant(Hex::new(0, 0)), Some(A));
        assert_eq!(next.occupant(Hex::new(0, 0)), None);
        assert_eq!(next.occupant(Hex::new(0, 2)), Some(A));
    }

    #[test]
    fn pieces_are_listed_in_layout_order() {
        let mut state = empty_board();
        state.place(Hex::new(0, 2), A);
        state.place(Hex::new(1, -3), A);
        state.place(Hex::new(0, 0), B);
        let pieces: Vec<Hex> = state.pieces(A).collect();
        assert_eq!(pieces, vec![Hex::new(1, -3), Hex::new(0, 2)]);
    }
}
