//! Error handling for the King scoreboard.

pub mod domain;

pub use domain::{DomainError, NotFoundKind, ValidationKind};
