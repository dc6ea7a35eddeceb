//! Snapshot API tests covering all game phases.

use crate::domain::reveal::{advance_turn, mark_role_seen};
use crate::domain::snapshot::{snapshot, PhaseSnapshot};
use crate::domain::state::GameState;
use crate::domain::test_state_helpers::{init_game, init_playing_game};

#[test]
fn setup_snapshot_smoke() {
    let snap = snapshot(&GameState::empty());

    assert_eq!(snap.game.total_players, 0);
    assert!(snap.game.seating.is_empty());
    match snap.phase {
        PhaseSnapshot::Setup => {}
        _ => panic!("Expected Setup phase"),
    }
}

#[test]
fn passing_snapshot_counts_viewers() {
    let mut state = init_game(4, 1, "Harbor");

    let snap = snapshot(&state);
    match snap.phase {
        PhaseSnapshot::Passing(ref p) => {
            assert_eq!(p.to_view, 1);
            assert_eq!(p.seen_count, 0);
            assert_eq!(p.remaining, 4);
        }
        _ => panic!("Expected Passing phase"),
    }

    mark_role_seen(&mut state).unwrap();
    advance_turn(&mut state).unwrap();

    let snap = snapshot(&state);
    match snap.phase {
        PhaseSnapshot::Passing(ref p) => {
            assert_eq!(p.to_view, 2);
            assert_eq!(p.seen_count, 1);
            assert_eq!(p.remaining, 3);
        }
        _ => panic!("Expected Passing phase"),
    }
}

#[test]
fn passing_snapshot_marks_current_seat() {
    let mut state = init_game(4, 1, "Harbor");
    advance_turn(&mut state).unwrap();

    let snap = snapshot(&state);
    let current: Vec<_> = snap
        .game
        .seating
        .iter()
        .filter(|s| s.is_current)
        .collect();
    assert_eq!(current.len(), 1);
    assert_eq!(current[0].id, 2);
}

#[test]
fn playing_snapshot_tracks_speaker() {
    let mut state = init_playing_game(3, 1, "Harbor");

    match snapshot(&state).phase {
        PhaseSnapshot::Playing(ref p) => assert_eq!(p.to_speak, 1),
        _ => panic!("Expected Playing phase"),
    }

    advance_turn(&mut state).unwrap();
    match snapshot(&state).phase {
        PhaseSnapshot::Playing(ref p) => assert_eq!(p.to_speak, 2),
        _ => panic!("Expected Playing phase"),
    }
}

#[test]
fn snapshot_never_leaks_roles_or_words() {
    let state = init_game(5, 2, "Zeppelin");
    let snap = snapshot(&state);

    let json = serde_json::to_string(&snap).unwrap();
    assert!(!json.contains("Zeppelin"), "secret word leaked: {json}");
    assert!(!json.contains("\"Spy\""), "role leaked: {json}");
    assert!(!json.contains("\"Civilian\""), "role leaked: {json}");
}

#[test]
fn snapshot_wire_shape_is_adjacently_tagged() {
    let state = init_game(2, 1, "Harbor");
    let value: serde_json::Value = serde_json::to_value(snapshot(&state)).unwrap();

    assert_eq!(value["phase"]["phase"], "Passing");
    assert_eq!(value["phase"]["data"]["to_view"], 1);
    assert_eq!(value["game"]["total_players"], 2);
    assert_eq!(value["game"]["seating"][0]["name"], "Player 1");
}
