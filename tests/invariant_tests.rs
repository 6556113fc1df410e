//! Random playouts checking the properties every reachable position keeps.

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

use quad_duel::game::{EngineConfig, GameContext};
use quad_duel::rules::{king_in_check, legal_moves_for_seat, pseudo_moves};

/// Play `choices` from `game`, checking invariants before every move.
fn playout(mut game: GameContext, choices: &[u16]) -> Result<(), TestCaseError> {
    for &choice in choices {
        let Some(seat) = game.active_seat() else {
            break;
        };
        let mut position = game.position().clone();
        let moves = legal_moves_for_seat(&mut position, seat);
        prop_assert!(!moves.is_empty(), "{} is active with no legal move", seat);

        for mv in &moves {
            let before = position.clone();
            let undo = position.do_move(*mv);
            prop_assert!(!king_in_check(&position, seat), "{} leaves {} in check", mv, seat);
            position.undo_move(undo);
            prop_assert_eq!(&position, &before);
        }

        // Pseudo-legal moves of every own piece undo exactly too.
        let squares: Vec<_> = position.board.squares_of(seat).collect();
        for from in squares {
            let mut pseudo = quad_duel::core::MoveList::new();
            pseudo_moves(&position, from, &mut pseudo);
            for mv in pseudo {
                let before = position.clone();
                let undo = position.do_move(mv);
                position.undo_move(undo);
                prop_assert_eq!(&position, &before);
            }
        }

        let (sr, sc, er, ec) = moves[usize::from(choice) % moves.len()].coords();
        let applied = game.apply_move(seat, sr, sc, er, ec);
        prop_assert!(applied.is_ok(), "{:?}", applied);
    }
    Ok(())
}

// =============================================================================
// Four-Seat Playouts
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn test_four_seat_playouts_keep_invariants(choices in prop::collection::vec(any::<u16>(), 1..48)) {
        playout(GameContext::new(EngineConfig::default()), &choices)?;
    }

    #[test]
    fn test_auto_elimination_playouts_keep_invariants(choices in prop::collection::vec(any::<u16>(), 1..48)) {
        let config = EngineConfig::default().with_auto_elim_threshold(4);
        playout(GameContext::new(config), &choices)?;
    }
}

// =============================================================================
// Duel Playouts
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn test_duel_playouts_keep_invariants(choices in prop::collection::vec(any::<u16>(), 1..64)) {
        playout(GameContext::new_duel_only(EngineConfig::default()), &choices)?;
    }
}
