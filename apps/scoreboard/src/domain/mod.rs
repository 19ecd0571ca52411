//! Domain layer: pure scoring, validation, and history-query logic.

pub mod history;
pub mod names;
pub mod rounds;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod table;
pub mod validation;

#[cfg(test)]
mod tests_history;
#[cfg(test)]
mod tests_props_validation;
#[cfg(test)]
mod tests_state;
#[cfg(test)]
mod tests_validation;

// Re-exports for ergonomics
pub use history::{filter_and_sort, FinalScore, HistorySort, MatchHistoryEntry};
pub use names::normalize_player_name;
pub use rounds::{
    catalog, next_cell, round_def, FestaMode, FestaModeMap, RoundDef, RoundId, RoundKind, PLAYERS,
    ROUND_COUNT,
};
pub use scoring::{leaders, points_for, score_round, total_for, totals};
pub use snapshot::snapshot_session;
pub use state::{default_players, GameSession, Seat};
pub use table::{Cell, ScoreTable};
pub use validation::{validate_entry, EntryOutcome};
