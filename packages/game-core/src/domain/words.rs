//! Built-in secret word supply.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Words a civilian card may show when no custom word is configured.
///
/// Concrete everyday nouns work best: easy to describe obliquely, hard for
/// a spy to bluff from table talk alone.
pub const WORDS: &[&str] = &[
    "Pizza",
    "Guitar",
    "Ocean",
    "Castle",
    "Rainbow",
    "Volcano",
    "Telescope",
    "Penguin",
    "Laptop",
    "Dragon",
    "Library",
    "Campfire",
    "Submarine",
    "Windmill",
    "Avalanche",
    "Circus",
    "Lighthouse",
    "Treehouse",
    "Waterfall",
    "Spaceship",
];

/// Pick a secret word deterministically for the given seed.
pub fn pick_word(seed: u64) -> &'static str {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    WORDS[rng.random_range(0..WORDS.len())]
}
