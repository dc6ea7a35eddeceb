//! Error handling for the mole game core.

pub mod domain;

pub use domain::{ConfigErrorKind, DomainError};
