//! Game setup supplied by the presentation layer.
//!
//! All caller-supplied settings are validated here, at construction; a
//! `GameConfig` that exists is a playable one.

use crate::domain::rules::{valid_spy_range, MAX_PLAYERS, MIN_PLAYERS};
use crate::errors::domain::{ConfigErrorKind, DomainError};

/// Where the civilians' shared secret word comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// Seeded pick from the built-in word list.
    BuiltIn,
    /// Caller-supplied word, stored trimmed.
    Custom(String),
}

/// Validated game setup: table size, spy count, word source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    players: u8,
    spies: u8,
    word: WordSource,
}

impl GameConfig {
    /// Build a config using the built-in word list.
    pub fn new(players: u8, spies: u8) -> Result<Self, DomainError> {
        if players < MIN_PLAYERS {
            return Err(DomainError::invalid_configuration(
                ConfigErrorKind::TooFewPlayers,
                format!("Must have at least {MIN_PLAYERS} players"),
            ));
        }
        if players > MAX_PLAYERS {
            return Err(DomainError::invalid_configuration(
                ConfigErrorKind::TooManyPlayers,
                format!("At most {MAX_PLAYERS} players fit one device"),
            ));
        }
        if !valid_spy_range(players).contains(&spies) {
            return Err(DomainError::invalid_configuration(
                ConfigErrorKind::InvalidSpyCount,
                "Spy count must be at least 1 and less than total players",
            ));
        }
        Ok(Self {
            players,
            spies,
            word: WordSource::BuiltIn,
        })
    }

    /// Replace the built-in list with a custom secret word.
    pub fn with_custom_word(mut self, word: impl Into<String>) -> Result<Self, DomainError> {
        let word = word.into();
        let trimmed = word.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_configuration(
                ConfigErrorKind::BlankWord,
                "Custom word must not be blank",
            ));
        }
        self.word = WordSource::Custom(trimmed.to_string());
        Ok(self)
    }

    pub fn players(&self) -> u8 {
        self.players
    }

    pub fn spies(&self) -> u8 {
        self.spies
    }

    pub fn word(&self) -> &WordSource {
        &self.word
    }
}
