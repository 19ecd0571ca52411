#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod services;
pub mod storage;
pub mod telemetry;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::Config;
pub use domain::{Cell, FestaMode, GameSession, HistorySort, MatchHistoryEntry, RoundId, Seat};
pub use error::AppError;
pub use errors::domain::{DomainError, ValidationKind};
pub use services::{FlowEvent, GameFlowService};
pub use storage::{FileStore, KvStore, MemoryStore};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
