//! Game start and reset.

use tracing::{debug, info};

use crate::config::game::{GameConfig, WordSource};
use crate::domain::dealing::assign_players;
use crate::domain::seed_derivation::{derive_shuffle_seed, derive_word_seed, GameSeed};
use crate::domain::state::{GameState, Phase};
use crate::domain::words::pick_word;
use crate::errors::domain::DomainError;

/// Start a new game: deal roles and hand the device to the first player.
///
/// All randomness derives from `game_seed`, so the same config and seed
/// reproduce the same table. The returned state is already in the Passing
/// phase with the turn on seat one.
pub fn start_game(config: &GameConfig, game_seed: GameSeed) -> Result<GameState, DomainError> {
    let players = config.players();
    let spies = config.spies();
    info!(players, spies, "Starting game");

    let secret_word = match config.word() {
        WordSource::Custom(word) => word.clone(),
        WordSource::BuiltIn => pick_word(derive_word_seed(game_seed)).to_string(),
    };

    let dealt = assign_players(players, spies, &secret_word, derive_shuffle_seed(game_seed))?;
    debug!(players = dealt.len(), "Roles dealt");

    Ok(GameState {
        players: dealt,
        turn: 0,
        total_players: players,
        secret_word,
        phase: Phase::Passing,
    })
}

/// Discard any game in progress and return the canonical empty state.
pub fn reset_game() -> GameState {
    debug!("Resetting game");
    GameState::empty()
}
