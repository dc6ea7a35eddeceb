//! Test-only game state helpers for domain unit tests.

use crate::config::game::GameConfig;
use crate::domain::lifecycle::start_game;
use crate::domain::reveal::advance_turn;
use crate::domain::state::{GameState, Phase};

/// Fixed seed so unit tests see one stable table layout.
pub const TEST_SEED: i64 = 42;

/// Start a game with a custom word and the fixed test seed.
pub fn init_game(players: u8, spies: u8, word: &str) -> GameState {
    let config = GameConfig::new(players, spies)
        .and_then(|c| c.with_custom_word(word))
        .expect("valid test config");
    start_game(&config, TEST_SEED).expect("valid config starts")
}

/// Drive a fresh game through the whole reveal round into Playing.
pub fn init_playing_game(players: u8, spies: u8, word: &str) -> GameState {
    let mut state = init_game(players, spies, word);
    for _ in 0..players {
        advance_turn(&mut state).expect("non-empty game advances");
    }
    assert_eq!(state.phase, Phase::Playing);
    state
}
