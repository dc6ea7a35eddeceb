//! Public snapshot API for observing game state without exposing secrets.

use serde::{Deserialize, Serialize};

use crate::domain::player_view::{public_seats, SeatPublic};
use crate::domain::state::{GameState, Phase, PlayerId};

/// Game-level header present in all snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameHeader {
    pub total_players: u8,
    pub seating: Vec<SeatPublic>,
}

/// Top-level snapshot combining header and phase-specific data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub game: GameHeader,
    pub phase: PhaseSnapshot,
}

/// Adjacently tagged union of phase-specific snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "data")]
pub enum PhaseSnapshot {
    Setup,
    Passing(PassingSnapshot),
    Playing(PlayingSnapshot),
}

/// Reveal-round snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassingSnapshot {
    /// Player whose turn it is to view their card.
    pub to_view: PlayerId,
    /// How many players have already seen their role.
    pub seen_count: u8,
    /// How many have not.
    pub remaining: u8,
}

/// Discussion snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayingSnapshot {
    /// Player currently holding the floor.
    pub to_speak: PlayerId,
}

/// Entry point: produce a snapshot of the current game state.
/// Never panics; produces safe defaults for inconsistent states.
pub fn snapshot(state: &GameState) -> GameSnapshot {
    let game = GameHeader {
        total_players: state.total_players,
        seating: public_seats(state),
    };

    let phase = match state.phase {
        Phase::Setup => PhaseSnapshot::Setup,
        Phase::Passing => snapshot_passing(state),
        Phase::Playing => snapshot_playing(state),
    };

    GameSnapshot { game, phase }
}

fn current_id(state: &GameState) -> PlayerId {
    state.players.get(state.turn).map(|p| p.id).unwrap_or(0)
}

fn snapshot_passing(state: &GameState) -> PhaseSnapshot {
    let seen = state.players.iter().filter(|p| p.has_seen_role).count() as u8;
    PhaseSnapshot::Passing(PassingSnapshot {
        to_view: current_id(state),
        seen_count: seen,
        remaining: state.total_players.saturating_sub(seen),
    })
}

fn snapshot_playing(state: &GameState) -> PhaseSnapshot {
    PhaseSnapshot::Playing(PlayingSnapshot {
        to_speak: current_id(state),
    })
}
