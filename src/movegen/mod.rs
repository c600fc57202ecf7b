//! Legal move generation.
//!
//! Every legality question (search expansion, the random baseline, and any
//! human-input path) goes through this module.

pub mod jump;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{BoardState, Move, Side};

pub use jump::legal_destinations;

/// All legal moves for `side`: pieces in layout order, destinations in axis order.
pub fn all_moves(state: &BoardState, side: Side) -> Vec<Move> {
    let mut moves = Vec::new();
    for from in state.pieces(side) {
        for to in legal_destinations(from, state) {
            moves.push(Move::new(from, to));
        }
    }
    moves
}

/// Whether `side` may play `mv` on `state`.
pub fn is_legal(mv: Move, state: &BoardState, side: Side) -> bool {
    state.occupant(mv.from) == Some(side) && legal_destinations(mv.from, state).contains(&mv.to)
}

/// Picks one legal move for `side` uniformly at random, or `None` if the side
/// cannot move.
pub fn random_move(state: &BoardState, side: Side, rng: &mut impl Rng) -> Option<Move> {
    all_moves(state, side).choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::board::{build_board, BoardConfig, Hex, Layout};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const A: Side = Side(1);
    const B: Side = Side(2);

    fn seeded_rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn opening_position_has_moves_for_both_sides() {
        let setup = build_board(BoardConfig::default(), A, B).unwrap();
        let a_moves = all_moves(&setup.state, A);
        let b_moves = all_moves(&setup.state, B);
        assert!(!a_moves.is_empty());
        assert_eq!(a_moves.len(), b_moves.len());
        for mv in &a_moves {
            assert_eq!(setup.state.occupant(mv.from), Some(A));
        }
    }

    #[test]
    fn all_moves_only_uses_own_pieces() {
        let mut state = BoardState::empty(Arc::new(Layout::new(BoardConfig::default()).unwrap()));
        state.place(Hex::new(0, 0), A);
        state.place(Hex::new(1, 0), B);
        assert_eq!(all_moves(&state, A), vec![Move::new(Hex::new(0, 0), Hex::new(2, 0))]);
        assert_eq!(all_moves(&state, B), vec![Move::new(Hex::new(1, 0), Hex::new(-1, 0))]);
    }

    #[test]
    fn legality_check_matches_generator() {
        let setup = build_board(BoardConfig::default(), A, B).unwrap();
        for mv in all_moves(&setup.state, A) {
            assert!(is_legal(mv, &setup.state, A));
            assert!(!is_legal(mv, &setup.state, B));
        }
        let step = Move::new(Hex::new(1, -5), Hex::new(1, -4));
        assert!(!is_legal(step, &setup.state, A), "single steps are never legal");
    }

    #[test]
    fn random_move_is_legal() {
        let setup = build_board(BoardConfig::default(), A, B).unwrap();
        let mut rng = seeded_rng();
        for _ in 0..50 {
            let mv = random_move(&setup.state, A, &mut rng).unwrap();
            assert!(is_legal(mv, &setup.state, A));
        }
    }

    #[test]
    fn random_move_none_without_pieces() {
        let state = BoardState::empty(Arc::new(Layout::new(BoardConfig::default()).unwrap()));
        assert_eq!(random_move(&state, A, &mut seeded_rng()), None);
    }

    #[test]
    fn random_move_deterministic_with_same_seed() {
        let setup = build_board(BoardConfig::default(), A, B).unwrap();
        let m1 = random_move(&setup.state, A, &mut StdRng::seed_from_u64(7));
        let m2 = random_move(&setup.state, A, &mut StdRng::seed_from_u64(7));
        assert_eq!(m1, m2);
    }
}
