//! Deterministic single-shot timers for auto-advance and error expiry.
//!
//! Time is caller-supplied milliseconds; the registry never consults a real
//! clock, so tests drive it directly. At most one timer is live per key:
//! re-scheduling an armed key replaces its deadline (cancel + re-arm), which
//! is what debounces repeated edits to the same cell.

use std::collections::BTreeMap;

use crate::domain::rounds::RoundId;
use crate::domain::state::Seat;

/// Debounce before focus moves off a freshly accepted cell.
pub const ADVANCE_DEBOUNCE_MS: u64 = 450;
/// Lifetime of a row-scoped validation message.
pub const ROW_ERROR_TTL_MS: u64 = 2200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TimerKey {
    Advance { round: RoundId, seat: Seat },
    RowError { round: RoundId },
}

/// Fired timer, carrying the key's identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// The debounce for an accepted edit elapsed; focus may move on.
    AdvanceDue { round: RoundId, seat: Seat },
    RowErrorExpired { round: RoundId },
}

#[derive(Debug, Default)]
pub struct Scheduler {
    deadlines: BTreeMap<TimerKey, u64>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm (or re-arm) a key. An existing deadline is replaced, never stacked.
    pub fn schedule(&mut self, key: TimerKey, at_ms: u64) {
        self.deadlines.insert(key, at_ms);
    }

    pub fn cancel(&mut self, key: &TimerKey) {
        self.deadlines.remove(key);
    }

    pub fn is_armed(&self, key: &TimerKey) -> bool {
        self.deadlines.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.deadlines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deadlines.is_empty()
    }

    /// Remove and return every timer due at `now_ms`, ordered by deadline
    /// then key so draining is deterministic.
    pub fn fire_due(&mut self, now_ms: u64) -> Vec<TimerEvent> {
        let mut due: Vec<(TimerKey, u64)> = self
            .deadlines
            .iter()
            .filter(|(_, at)| **at <= now_ms)
            .map(|(k, at)| (*k, *at))
            .collect();
        due.sort_by_key(|(key, at)| (*at, *key));

        for (key, _) in &due {
            self.deadlines.remove(key);
        }

        due.into_iter()
            .map(|(key, _)| match key {
                TimerKey::Advance { round, seat } => TimerEvent::AdvanceDue { round, seat },
                TimerKey::RowError { round } => TimerEvent::RowErrorExpired { round },
            })
            .collect()
    }
}
