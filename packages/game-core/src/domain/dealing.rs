//! Deterministic role dealing logic.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::rules::{valid_spy_range, MIN_PLAYERS, SPY_WORD};
use crate::domain::state::{Player, PlayerId, Role};
use crate::errors::domain::{ConfigErrorKind, DomainError};

/// Build the unshuffled role multiset: `spies` spies, the rest civilians.
fn role_labels(players: u8, spies: u8) -> Vec<Role> {
    let mut roles = vec![Role::Spy; spies as usize];
    roles.resize(players as usize, Role::Civilian);
    roles
}

/// Fisher-Yates shuffle using a seeded, portable RNG.
///
/// ChaCha keeps the permutation stable for a given seed across platforms
/// and rand releases. `random_range` is uniform, so every permutation of
/// the label multiset is equally likely.
fn shuffle_with_seed(roles: &mut [Role], seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for i in (1..roles.len()).rev() {
        let j = rng.random_range(0..=i);
        roles.swap(i, j);
    }
}

/// Deal roles deterministically given table size, spy count, and RNG seed.
///
/// Returns one role per seat in turn order. Only the two core invariants
/// are enforced here; table-size bounds live in [`crate::config::game::GameConfig`].
pub fn deal_roles(players: u8, spies: u8, seed: u64) -> Result<Vec<Role>, DomainError> {
    if players < MIN_PLAYERS {
        return Err(DomainError::invalid_configuration(
            ConfigErrorKind::TooFewPlayers,
            format!("Must have at least {MIN_PLAYERS} players"),
        ));
    }
    if !valid_spy_range(players).contains(&spies) {
        return Err(DomainError::invalid_configuration(
            ConfigErrorKind::InvalidSpyCount,
            "Spy count must be at least 1 and less than total players",
        ));
    }

    let mut roles = role_labels(players, spies);
    shuffle_with_seed(&mut roles, seed);
    Ok(roles)
}

/// Deal a full table: shuffled roles attached to sequential 1-based seats.
///
/// Civilians' cards display `secret_word`; spies' cards display the spy
/// sentinel. Fresh sequence every call; inputs are not mutated.
pub fn assign_players(
    players: u8,
    spies: u8,
    secret_word: &str,
    seed: u64,
) -> Result<Vec<Player>, DomainError> {
    let roles = deal_roles(players, spies, seed)?;
    Ok(roles
        .into_iter()
        .enumerate()
        .map(|(idx, role)| {
            let id = (idx + 1) as PlayerId;
            Player {
                id,
                name: format!("Player {id}"),
                role,
                word: match role {
                    Role::Spy => SPY_WORD.to_string(),
                    Role::Civilian => secret_word.to_string(),
                },
                has_seen_role: false,
            }
        })
        .collect())
}
