//! RNG seed derivation utilities for deterministic game behavior.
//!
//! One entropy draw per game produces a [`GameSeed`]; every downstream
//! random choice (role shuffle, word pick) derives its own sub-seed from
//! it, so a stored seed replays the exact same table.

/// Base RNG seed, generated once per game.
pub type GameSeed = i64;

/// Draw a fresh game seed from ambient entropy.
///
/// The only nondeterministic call in the crate; everything below this
/// boundary is a pure function of the seed.
pub fn fresh_game_seed() -> GameSeed {
    rand::random()
}

/// Derive the seed for the role shuffle.
pub fn derive_shuffle_seed(game_seed: GameSeed) -> u64 {
    // Cast i64 to u64 for RNG (sign doesn't matter for seed)
    let base = game_seed as u64;
    base.wrapping_add(1) // Offset to distinguish from word seed
}

/// Derive the seed for the secret-word pick.
pub fn derive_word_seed(game_seed: GameSeed) -> u64 {
    let base = game_seed as u64;
    base.wrapping_add(2) // Offset to distinguish from shuffle seed
}
