//! Reveal-turn tracking: who holds the device, and phase advancement.

use tracing::debug;

use crate::domain::state::{next_seat, require_players, GameState, Phase, Player, PlayerId};
use crate::errors::domain::DomainError;

/// Result of advancing the turn, describing what state changes occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnAdvance {
    /// Seat index holding the device/floor after this advance.
    pub turn_after: usize,
    /// Phase transitioned to, if any (None means the phase did not change).
    pub phase_transitioned: Option<Phase>,
    /// Whether this advance wrapped past the last seat back to the first.
    pub round_completed: bool,
}

/// Player currently holding the device (Passing) or the floor (Playing).
///
/// Idempotent: repeated calls without intervening mutation return the same
/// player.
pub fn current_player(state: &GameState) -> Result<&Player, DomainError> {
    require_players(state, "current_player")?;
    Ok(&state.players[state.turn])
}

/// Record that the current player has privately viewed their card.
///
/// Idempotent on repeat; all other fields are untouched.
pub fn mark_role_seen(state: &mut GameState) -> Result<PlayerId, DomainError> {
    require_players(state, "mark_role_seen")?;
    let player = &mut state.players[state.turn];
    player.has_seen_role = true;
    Ok(player.id)
}

/// Advance the turn, gating Passing → Playing after the last seat.
///
/// During Passing each advance moves the device one seat; when the last
/// player passes it on, the turn resets to the first seat and the game
/// enters Playing exactly once. During Playing the turn rotates
/// round-robin with no further phase change, until reset.
pub fn advance_turn(state: &mut GameState) -> Result<TurnAdvance, DomainError> {
    require_players(state, "advance_turn")?;
    let count = state.players.len();

    match state.phase {
        Phase::Passing => {
            let next = state.turn + 1;
            if next >= count {
                state.turn = 0;
                state.phase = Phase::Playing;
                debug!(players = count, "Reveal round complete");
                return Ok(TurnAdvance {
                    turn_after: 0,
                    phase_transitioned: Some(Phase::Playing),
                    round_completed: true,
                });
            }
            state.turn = next;
            Ok(TurnAdvance {
                turn_after: next,
                phase_transitioned: None,
                round_completed: false,
            })
        }
        // Setup with players present is unreachable through the public
        // API; rotate as in Playing.
        Phase::Playing | Phase::Setup => {
            let next = next_seat(state.turn, count);
            state.turn = next;
            Ok(TurnAdvance {
                turn_after: next,
                phase_transitioned: None,
                round_completed: next == 0,
            })
        }
    }
}

/// True when the turn points at the first seat of a non-empty table.
///
/// Detects a completed wrap of the Playing round-robin; also trivially
/// true at game start, before anyone has acted.
pub fn has_completed_round(state: &GameState) -> bool {
    state.turn == 0 && !state.players.is_empty()
}

/// True once every player has viewed their role. Gates the discussion
/// screen in UIs that want an explicit check beyond the Playing phase.
pub fn all_roles_seen(state: &GameState) -> bool {
    !state.players.is_empty() && state.players.iter().all(|p| p.has_seen_role)
}
