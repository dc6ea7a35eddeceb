//! Caller-facing configuration types.

pub mod game;

pub use game::{GameConfig, WordSource};
