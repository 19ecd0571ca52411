//! Services: session orchestration and the deterministic timer registry.

pub mod game_flow;
pub mod scheduler;

pub use game_flow::{FlowEvent, GameFlowService};
pub use scheduler::{Scheduler, TimerEvent, TimerKey, ADVANCE_DEBOUNCE_MS, ROW_ERROR_TTL_MS};
