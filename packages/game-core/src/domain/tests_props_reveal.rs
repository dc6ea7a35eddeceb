//! Property tests for the turn tracker state machine.
//!
//! Machine contract:
//! - A fresh game starts in Passing with the turn on seat 0
//! - n advances gate into Playing with the turn back on seat 0
//! - In Playing the turn rotates round-robin, phase fixed
//! - The turn index never escapes [0, players.len())

use proptest::prelude::*;

use crate::domain::reveal::{
    advance_turn, all_roles_seen, current_player, has_completed_round, mark_role_seen,
};
use crate::domain::state::Phase;
use crate::domain::test_gens;
use crate::domain::test_prelude;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: a full reveal round gates into Playing exactly at the end.
    #[test]
    fn prop_full_reveal_gates_once(mut state in test_gens::started_game()) {
        let n = state.players.len();

        for step in 1..=n {
            prop_assert_eq!(state.phase, Phase::Passing);
            mark_role_seen(&mut state).unwrap();
            let adv = advance_turn(&mut state).unwrap();

            if step < n {
                prop_assert_eq!(adv.turn_after, step);
                prop_assert_eq!(adv.phase_transitioned, None);
                prop_assert!(!adv.round_completed);
            } else {
                prop_assert_eq!(adv.turn_after, 0);
                prop_assert_eq!(adv.phase_transitioned, Some(Phase::Playing));
                prop_assert!(adv.round_completed);
            }
        }

        prop_assert_eq!(state.phase, Phase::Playing);
        prop_assert_eq!(state.turn, 0);
        prop_assert!(all_roles_seen(&state));
    }

    /// Property: in Playing, k advances land on seat k mod n.
    #[test]
    fn prop_playing_rotation_is_modular(
        mut state in test_gens::started_game(),
        extra in 1usize..32,
    ) {
        let n = state.players.len();
        for _ in 0..n {
            advance_turn(&mut state).unwrap();
        }

        for k in 1..=extra {
            let adv = advance_turn(&mut state).unwrap();
            prop_assert_eq!(adv.turn_after, k % n);
            prop_assert_eq!(adv.phase_transitioned, None);
            prop_assert_eq!(adv.round_completed, k % n == 0);
            prop_assert_eq!(state.phase, Phase::Playing);
        }

        prop_assert_eq!(state.turn, extra % n);
    }

    /// Property: the turn index stays in bounds through arbitrary drives.
    #[test]
    fn prop_turn_index_stays_in_bounds(
        mut state in test_gens::started_game(),
        steps in 1usize..64,
    ) {
        let n = state.players.len();
        for _ in 0..steps {
            advance_turn(&mut state).unwrap();
            prop_assert!(state.turn < n);
            // current_player never fails on a non-empty table
            prop_assert!(current_player(&state).is_ok());
        }
    }

    /// Property: has_completed_round is exactly "turn on seat 0".
    #[test]
    fn prop_round_wrap_detector_matches_turn(
        mut state in test_gens::started_game(),
        steps in 0usize..64,
    ) {
        for _ in 0..steps {
            advance_turn(&mut state).unwrap();
        }
        prop_assert_eq!(has_completed_round(&state), state.turn == 0);
    }

    /// Property: marking every seat during the reveal yields all_roles_seen,
    /// and the marks survive the phase gate.
    #[test]
    fn prop_marks_accumulate(mut state in test_gens::started_game()) {
        let n = state.players.len();
        prop_assert!(!all_roles_seen(&state));

        for _ in 0..n {
            mark_role_seen(&mut state).unwrap();
            advance_turn(&mut state).unwrap();
        }
        prop_assert!(all_roles_seen(&state));
        // Marks survive the phase gate
        prop_assert!(state.players.iter().all(|p| p.has_seen_role));
    }
}
