#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod errors;

// Re-exports for public API
pub use config::game::{GameConfig, WordSource};
pub use domain::dealing::{assign_players, deal_roles};
pub use domain::game_transition::{derive_transitions, GameLifecycleView, RevealTransition};
pub use domain::lifecycle::{reset_game, start_game};
pub use domain::player_view::{public_seats, role_card, RoleCard, SeatPublic};
pub use domain::reveal::{
    advance_turn, all_roles_seen, current_player, has_completed_round, mark_role_seen, TurnAdvance,
};
pub use domain::seed_derivation::{fresh_game_seed, GameSeed};
pub use domain::snapshot::{snapshot, GameSnapshot, PhaseSnapshot};
pub use domain::state::{GameState, Phase, Player, PlayerId, Role};
pub use errors::domain::{ConfigErrorKind, DomainError};

// Prelude for test convenience
pub mod prelude {
    pub use super::config::game::*;
    pub use super::domain::dealing::*;
    pub use super::domain::game_transition::*;
    pub use super::domain::lifecycle::*;
    pub use super::domain::player_view::*;
    pub use super::domain::reveal::*;
    pub use super::domain::rules::*;
    pub use super::domain::seed_derivation::*;
    pub use super::domain::snapshot::*;
    pub use super::domain::state::*;
    pub use super::domain::words::*;
    pub use super::errors::domain::*;
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    mole_test_support::logging::init();
}
