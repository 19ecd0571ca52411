//! Session orchestration: validation, scoring state, timers, persistence.
//!
//! Every mutating operation persists afterwards, best-effort. Rejected input
//! surfaces a transient row-scoped message and leaves stored cells untouched.

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;
use time::macros::format_description;
use time::OffsetDateTime;
use tracing::info;

use crate::domain::history::{filter_and_sort, HistorySort, MatchHistoryEntry};
use crate::domain::names::normalize_player_name;
use crate::domain::rounds::{next_cell, round_def, FestaMode, RoundId, PLAYERS};
use crate::domain::snapshot::snapshot_session;
use crate::domain::state::{GameSession, Seat};
use crate::domain::validation::{validate_entry, EntryOutcome};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::services::scheduler::{
    Scheduler, TimerEvent, TimerKey, ADVANCE_DEBOUNCE_MS, ROW_ERROR_TTL_MS,
};
use crate::storage::records::{self, PersistedState};
use crate::storage::store::KvStore;

/// Drained timer outcome for the caller's presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowEvent {
    /// Focus should move to this cell.
    FocusCell { round: RoundId, seat: Seat },
    RowErrorCleared { round: RoundId },
}

/// Single-threaded façade over the live session, its timers, and storage.
pub struct GameFlowService<S: KvStore> {
    store: S,
    pub session: GameSession,
    pub history: Vec<MatchHistoryEntry>,
    /// Persisted preference only; no theming logic lives here.
    pub dark_mode: bool,
    scheduler: Scheduler,
    row_errors: BTreeMap<RoundId, &'static str>,
}

impl<S: KvStore> GameFlowService<S> {
    /// Build a service around whatever the store holds. Absent or malformed
    /// records decode to defaults; the session starts inactive.
    pub fn load(store: S) -> Self {
        let persisted = records::load(&store);
        let mut session = GameSession::new();
        session.players = persisted.players;
        session.table = persisted.table;
        session.festa_modes = persisted.festa_modes;
        session.locked = persisted.locked;

        Self {
            store,
            session,
            history: persisted.history,
            dark_mode: persisted.dark_mode,
            scheduler: Scheduler::new(),
            row_errors: BTreeMap::new(),
        }
    }

    fn persist(&mut self) {
        let state = PersistedState {
            table: self.session.table.clone(),
            players: self.session.players.clone(),
            festa_modes: self.session.festa_modes.clone(),
            history: self.history.clone(),
            dark_mode: self.dark_mode,
            locked: self.session.locked,
        };
        records::save(&mut self.store, &state);
    }

    /// Activate the session, keeping a table reloaded from storage.
    pub fn start_game(&mut self) {
        self.session.start();
        info!("game started");
        self.persist();
    }

    /// Validate and store one cell edit.
    ///
    /// Acceptance of a genuine numeric value arms the debounced auto-advance
    /// for the edited cell; re-editing within the window re-arms instead of
    /// stacking. Rejection arms the row's transient error message and leaves
    /// the stored cell unchanged.
    pub fn update_score(
        &mut self,
        round: RoundId,
        seat: Seat,
        raw: &str,
        now_ms: u64,
    ) -> Result<EntryOutcome, DomainError> {
        let def = round_def(round);
        let row = *self.session.table.row(round);

        match validate_entry(def, raw, &row, seat, self.session.locked) {
            Ok(outcome) => {
                self.session.table.set_cell(round, seat, outcome.cell);
                self.session.refresh_dealer();
                if outcome.advance {
                    self.scheduler
                        .schedule(TimerKey::Advance { round, seat }, now_ms + ADVANCE_DEBOUNCE_MS);
                }
                self.persist();
                Ok(outcome)
            }
            Err(err) => {
                if let Some(msg) = err.validation_kind().and_then(ValidationKind::row_message) {
                    self.row_errors.insert(round, msg);
                    self.scheduler
                        .schedule(TimerKey::RowError { round }, now_ms + ROW_ERROR_TTL_MS);
                }
                Err(err)
            }
        }
    }

    /// Drain timers due at `now_ms` into presentation events.
    pub fn tick(&mut self, now_ms: u64) -> Vec<FlowEvent> {
        self.scheduler
            .fire_due(now_ms)
            .into_iter()
            .map(|event| match event {
                TimerEvent::AdvanceDue { round, seat } => {
                    let (round, seat) = next_cell(round, seat);
                    FlowEvent::FocusCell { round, seat }
                }
                TimerEvent::RowErrorExpired { round } => {
                    self.row_errors.remove(&round);
                    FlowEvent::RowErrorCleared { round }
                }
            })
            .collect()
    }

    /// Live transient message for a round, if one has not expired yet.
    pub fn row_error(&self, round: RoundId) -> Option<&'static str> {
        self.row_errors.get(&round).copied()
    }

    /// Flip a festa round's mode. Mandatory side effect: the round's four
    /// cells reset to empty and its transient error is dropped.
    pub fn toggle_festa_mode(&mut self, round: RoundId) -> Result<FestaMode, DomainError> {
        if self.session.locked {
            return Err(DomainError::validation(
                ValidationKind::EditLocked,
                "Editing is locked",
            ));
        }
        let mode = self.session.festa_modes.toggle(round)?;
        self.session.table.clear_row(round);
        self.session.refresh_dealer();
        self.row_errors.remove(&round);
        self.scheduler.cancel(&TimerKey::RowError { round });
        self.persist();
        Ok(mode)
    }

    pub fn set_player_name(&mut self, seat: Seat, raw: &str) -> Result<(), DomainError> {
        if seat as usize >= PLAYERS {
            return Err(DomainError::validation(
                ValidationKind::InvalidSeat,
                format!("Invalid seat: {seat}"),
            ));
        }
        self.session.players[seat as usize] = normalize_player_name(raw);
        self.persist();
        Ok(())
    }

    /// Shuffle seat order (Fisher-Yates). Destructive-action confirmation is
    /// the caller's concern.
    pub fn shuffle_players<R: Rng>(&mut self, rng: &mut R) {
        self.session.players.shuffle(rng);
        self.persist();
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.session.locked = locked;
        self.persist();
    }

    pub fn set_dark_mode(&mut self, dark: bool) {
        self.dark_mode = dark;
        self.persist();
    }

    /// Discard the match in progress and return to pre-game entry.
    pub fn reset_game(&mut self) {
        self.session.reset();
        self.row_errors.clear();
        self.scheduler = Scheduler::new();
        info!("game reset");
        self.persist();
    }

    /// Snapshot the finished game into history, then reset. Returns the new
    /// entry's id.
    pub fn save_game(&mut self, now: OffsetDateTime) -> Result<i64, DomainError> {
        if !self.session.game_finished() {
            return Err(DomainError::validation(
                ValidationKind::GameNotFinished,
                "Game is not finished",
            ));
        }

        let id = (now.unix_timestamp_nanos() / 1_000_000) as i64;
        let entry = snapshot_session(&self.session, id, format_date(now));
        self.history.insert(0, entry);
        info!(id, "game saved to history");

        self.session.reset();
        self.row_errors.clear();
        self.scheduler = Scheduler::new();
        self.persist();
        Ok(id)
    }

    pub fn delete_history_entry(&mut self, id: i64) -> Result<(), DomainError> {
        let before = self.history.len();
        self.history.retain(|entry| entry.id != id);
        if self.history.len() == before {
            return Err(DomainError::not_found(
                NotFoundKind::HistoryEntry,
                format!("No history entry with id {id}"),
            ));
        }
        self.persist();
        Ok(())
    }

    /// Load a past entry's players into the live session.
    pub fn repeat_history_players(&mut self, id: i64) -> Result<(), DomainError> {
        let entry = self
            .history
            .iter()
            .find(|entry| entry.id == id)
            .ok_or_else(|| {
                DomainError::not_found(
                    NotFoundKind::HistoryEntry,
                    format!("No history entry with id {id}"),
                )
            })?;
        self.session.players = entry.players.clone();
        self.persist();
        Ok(())
    }

    pub fn history_view(&self, query: &str, sort: HistorySort) -> Vec<MatchHistoryEntry> {
        filter_and_sort(&self.history, query, sort)
    }

    /// Before-navigate guard: warn while an unfinished active game exists.
    pub fn should_warn_before_exit(&self) -> bool {
        self.session.active && !self.session.game_finished()
    }
}

fn format_date(now: OffsetDateTime) -> String {
    let fmt = format_description!("[day]/[month]/[year], [hour]:[minute]:[second]");
    now.format(&fmt).unwrap_or_else(|_| now.to_string())
}
