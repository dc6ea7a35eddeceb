//! Edge-triggered lifecycle transitions derived from before/after states.
//!
//! The presentation layer fires one-shot effects (haptics, sounds, screen
//! changes) off these rather than re-deriving them from raw state.

use crate::domain::state::{GameState, Phase, PlayerId};

/// The slice of state that transition derivation compares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameLifecycleView {
    pub phase: Phase,
    /// Current player id; None when the table is empty.
    pub turn: Option<PlayerId>,
}

impl GameLifecycleView {
    pub fn of(state: &GameState) -> Self {
        Self {
            phase: state.phase,
            turn: state.players.get(state.turn).map(|p| p.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealTransition {
    /// Edge-triggered: the turn became a specific player.
    TurnBecame { player_id: PlayerId },

    /// Edge-triggered: game moved from Setup -> Passing.
    GameStarted,

    /// Edge-triggered: reveal round finished, Passing -> Playing.
    RevealCompleted,

    /// Edge-triggered: game moved back to Setup.
    GameReset,
}

/// Derive domain transitions from before/after lifecycle state.
pub fn derive_transitions(
    before: &GameLifecycleView,
    after: &GameLifecycleView,
) -> Vec<RevealTransition> {
    let mut transitions = Vec::new();

    // 1. Turn change
    if let Some(player_id) = after.turn {
        if before.turn != Some(player_id) {
            transitions.push(RevealTransition::TurnBecame { player_id });
        }
    }

    // 2. Game start (Setup -> Passing)
    if before.phase == Phase::Setup && after.phase == Phase::Passing {
        transitions.push(RevealTransition::GameStarted);
    }

    // 3. Reveal complete (Passing -> Playing)
    if before.phase == Phase::Passing && after.phase == Phase::Playing {
        transitions.push(RevealTransition::RevealCompleted);
    }

    // 4. Reset (!Setup -> Setup)
    if before.phase != Phase::Setup && after.phase == Phase::Setup {
        transitions.push(RevealTransition::GameReset);
    }

    transitions
}
