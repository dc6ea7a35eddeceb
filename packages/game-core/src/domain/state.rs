use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;

pub type PlayerId = u8; // 1-based, stable for the game's lifetime

/// Hidden role dealt to a player at game start.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Minority role; never learns the secret word.
    Spy,
    /// Majority role; all civilians share the secret word.
    Civilian,
}

/// One seat at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// 1-based id; doubles as display number and turn-order position.
    pub id: PlayerId,
    /// Display name ("Player 3").
    pub name: String,
    pub role: Role,
    /// What this player's card displays when privately revealed.
    pub word: String,
    /// Set once the player has viewed their card.
    pub has_seen_role: bool,
}

/// Overall game progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    /// No game in progress; the canonical empty state.
    Setup,
    /// Device is passed around; each player views their role in turn.
    Passing,
    /// All roles seen; open discussion. Terminal until reset.
    Playing,
}

/// Entire game container, sufficient for pure domain operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Seats in turn order.
    pub players: Vec<Player>,
    /// Index into `players` of whoever holds the device (Passing) or the
    /// floor (Playing). Always < players.len() while players is non-empty.
    pub turn: usize,
    /// Table size as dealt; equals players.len().
    pub total_players: u8,
    /// The civilians' shared word.
    pub secret_word: String,
    pub phase: Phase,
}

impl GameState {
    /// Canonical empty state: no players, Setup phase.
    pub fn empty() -> Self {
        Self {
            players: Vec::new(),
            turn: 0,
            total_players: 0,
            secret_word: String::new(),
            phase: Phase::Setup,
        }
    }
}

/// Seat / turn math helpers over a table of `count` seats.
///
/// These live in `domain` so every consumer (turn tracker, views,
/// snapshots) shares a single source of truth for rotation and "who acts
/// next".
///
/// Clockwise direction is positive (+1).
#[inline]
pub fn seat_offset(idx: usize, delta: isize, count: usize) -> usize {
    debug_assert!(count > 0, "seat math needs a non-empty table");
    (idx as isize + delta).rem_euclid(count as isize) as usize
}

/// Next seat clockwise (0 → 1 → ... → count-1 → 0).
#[inline]
pub fn next_seat(idx: usize, count: usize) -> usize {
    seat_offset(idx, 1, count)
}

/// Previous seat counter-clockwise.
#[inline]
pub fn prev_seat(idx: usize, count: usize) -> usize {
    seat_offset(idx, -1, count)
}

/// Seat `n` steps clockwise from `start`.
#[inline]
pub fn nth_from(start: usize, n: usize, count: usize) -> usize {
    seat_offset(start, n as isize, count)
}

pub fn require_players(state: &GameState, ctx: &'static str) -> Result<(), DomainError> {
    if state.players.is_empty() {
        return Err(DomainError::empty_game(format!("no players in game ({ctx})")));
    }
    Ok(())
}
