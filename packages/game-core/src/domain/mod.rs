//! Domain layer: pure game logic types and helpers.

pub mod dealing;
pub mod game_transition;
pub mod lifecycle;
pub mod player_view;
pub mod reveal;
pub mod rules;
pub mod seed_derivation;
pub mod snapshot;
pub mod state;
pub mod words;

#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_props_reveal;
#[cfg(test)]
mod tests_snapshot_phases;

// Re-exports for ergonomics
pub use dealing::{assign_players, deal_roles};
pub use lifecycle::{reset_game, start_game};
pub use reveal::{
    advance_turn, all_roles_seen, current_player, has_completed_round, mark_role_seen, TurnAdvance,
};
pub use rules::{valid_spy_range, MAX_PLAYERS, MIN_PLAYERS, SPY_WORD};
pub use seed_derivation::{derive_shuffle_seed, derive_word_seed, fresh_game_seed, GameSeed};
pub use state::{next_seat, GameState, Phase, Player, PlayerId, Role};
