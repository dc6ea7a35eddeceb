//! Per-player visibility: what the device may show to whom.
//!
//! [`RoleCard`] is the private payload for the player currently holding
//! the device; [`SeatPublic`] is what the whole table may see. Nothing in
//! this module leaks another seat's role or word.

use serde::{Deserialize, Serialize};

use crate::domain::reveal::current_player;
use crate::domain::state::{GameState, PlayerId, Role};
use crate::errors::domain::DomainError;

/// The private card shown to the current player during their Passing turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCard {
    pub id: PlayerId,
    pub name: String,
    pub role: Role,
    /// The secret word for civilians; the spy sentinel for spies.
    pub word: String,
}

/// Produce the current player's private card.
pub fn role_card(state: &GameState) -> Result<RoleCard, DomainError> {
    let player = current_player(state)?;
    Ok(RoleCard {
        id: player.id,
        name: player.name.clone(),
        role: player.role,
        word: player.word.clone(),
    })
}

/// Public info about a single seat; role and word are redacted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatPublic {
    pub id: PlayerId,
    pub name: String,
    pub has_seen_role: bool,
    pub is_current: bool,
}

/// Table listing safe to render while the device is face-up.
pub fn public_seats(state: &GameState) -> Vec<SeatPublic> {
    state
        .players
        .iter()
        .enumerate()
        .map(|(idx, p)| SeatPublic {
            id: p.id,
            name: p.name.clone(),
            has_seen_role: p.has_seen_role,
            is_current: idx == state.turn,
        })
        .collect()
}
