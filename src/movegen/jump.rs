//! Jump destination generation.
//!
//! The only legal move is a jump: two steps along one of the six axes over an
//! occupied pivot into an empty, on-board landing cell. Single steps are
//! never legal.

use crate::board::{BoardState, Hex, AXES};

/// Returns the landing cells reachable from `from`, ordered by axis index.
///
/// Empty if `from` is off the board or no axis has an occupied pivot with a
/// vacant landing cell behind it. Whether `from` itself holds a piece is not
/// checked.
pub fn legal_destinations(from: Hex, state: &BoardState) -> Vec<Hex> {
    if !state.contains(from) {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(AXES.len());
    for axis in 0..AXES.len() {
        let pivot = from.along(axis, 1);
        let landing = from.along(axis, 2);
        if state.is_occupied(pivot) && state.is_vacant(landing) {
            out.push(landing);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::board::{build_board, BoardConfig, Layout, Side};

    const A: Side = Side(1);
    const B: Side = Side(2);

    fn empty_board() -> BoardState {
        BoardState::empty(Arc::new(Layout::new(BoardConfig::default()).unwrap()))
    }

    #[test]
    fn single_jump_over_neighbour() {
        let mut state = empty_board();
        state.place(Hex::new(0, 0), A);
        state.place(Hex::new(1, 0), B);
        assert_eq!(legal_destinations(Hex::new(0, 0), &state), vec![Hex::new(2, 0)]);
    }

    #[test]
    fn isolated_piece_cannot_move() {
        let mut state = empty_board();
        state.place(Hex::ORIGIN, A);
        assert!(legal_destinations(Hex::ORIGIN, &state).is_empty());
    }

    #[test]
    fn off_board_origin_yields_nothing() {
        let state = empty_board();
        assert!(legal_destinations(Hex::new(0, -30), &state).is_empty());
    }

    #[test]
    fn occupied_landing_blocks_jump() {
        let mut state = empty_board();
        state.place(Hex::new(0, 0), A);
        state.place(Hex::new(1, 0), A);
        state.place(Hex::new(2, 0), B);
        assert!(legal_destinations(Hex::new(0, 0), &state).is_empty());
    }

    #[test]
    fn landing_off_board_blocks_jump() {
        let mut state = empty_board();
        // (4,-8) is the top tip: jumping over it would land off the board.
        state.place(Hex::new(4, -7), A);
        state.place(Hex::new(4, -8), B);
        assert!(legal_destinations(Hex::new(4, -7), &state).is_empty());
    }

    #[test]
    fn results_follow_axis_order() {
        let mut state = empty_board();
        let from = Hex::ORIGIN;
        state.place(from, A);
        for axis in 0..AXES.len() {
            state.place(from.along(axis, 1), B);
        }
        let expected: Vec<Hex> = (0..AXES.len()).map(|a| from.along(a, 2)).collect();
        assert_eq!(legal_destinations(from, &state), expected);
    }

    #[test]
    fn every_destination_satisfies_the_jump_rule() {
        let setup = build_board(BoardConfig::default(), A, B).unwrap();
        let state = &setup.state;
        for (from, occupant) in state.cells() {
            if occupant.is_none() {
                continue;
            }
            for to in legal_destinations(from, state) {
                assert_eq!(from.distance(to), 2);
                assert!(state.is_vacant(to));
                let axis = (0..AXES.len())
                    .find(|&a| from.along(a, 2) == to)
                    .expect("destination must lie on an axis");
                assert!(state.is_occupied(from.along(axis, 1)));
            }
        }
    }
}
