//! The six persisted records and their tolerant codecs.
//!
//! There is no schema versioning: every record is optional, and an absent or
//! malformed record decodes to its default. Saving is best-effort.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::domain::history::MatchHistoryEntry;
use crate::domain::rounds::{FestaModeMap, PLAYERS};
use crate::domain::state::default_players;
use crate::domain::table::ScoreTable;
use crate::storage::store::KvStore;

pub mod keys {
    pub const SCORES: &str = "king_scores";
    pub const PLAYERS: &str = "king_players";
    pub const FESTA: &str = "king_festa";
    pub const HISTORY: &str = "king_history";
    pub const DARK: &str = "king_dark";
    pub const LOCKED: &str = "king_locked";
}

/// Everything the app persists, already decoded (or defaulted).
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedState {
    pub table: ScoreTable,
    pub players: [String; PLAYERS],
    pub festa_modes: FestaModeMap,
    pub history: Vec<MatchHistoryEntry>,
    pub dark_mode: bool,
    pub locked: bool,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            table: ScoreTable::empty(),
            players: default_players(),
            festa_modes: FestaModeMap::new(),
            history: Vec::new(),
            dark_mode: false,
            locked: false,
        }
    }
}

/// Load all six records, each independently tolerant.
pub fn load(store: &impl KvStore) -> PersistedState {
    PersistedState {
        table: load_record(store, keys::SCORES),
        players: load_players(store),
        festa_modes: load_record(store, keys::FESTA),
        history: load_record(store, keys::HISTORY),
        dark_mode: load_record(store, keys::DARK),
        locked: load_record(store, keys::LOCKED),
    }
}

/// Write all six records.
pub fn save(store: &mut impl KvStore, state: &PersistedState) {
    put_record(store, keys::SCORES, &state.table);
    put_record(store, keys::PLAYERS, &state.players);
    put_record(store, keys::FESTA, &state.festa_modes);
    put_record(store, keys::HISTORY, &state.history);
    put_record(store, keys::DARK, &state.dark_mode);
    put_record(store, keys::LOCKED, &state.locked);
}

fn load_record<T: DeserializeOwned + Default>(store: &impl KvStore, key: &str) -> T {
    let Some(raw) = store.get(key) else {
        return T::default();
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            warn!(key, %err, "malformed record; falling back to defaults");
            T::default()
        }
    }
}

// The wire shape is a plain JSON array; anything other than exactly 4 names
// falls back to the placeholders.
fn load_players(store: &impl KvStore) -> [String; PLAYERS] {
    let names: Vec<String> = load_record(store, keys::PLAYERS);
    match <[String; PLAYERS]>::try_from(names) {
        Ok(players) => players,
        Err(other) => {
            if !other.is_empty() {
                warn!(
                    count = other.len(),
                    "player record does not hold 4 names; falling back to defaults"
                );
            }
            default_players()
        }
    }
}

fn put_record<T: Serialize>(store: &mut impl KvStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => store.put(key, &raw),
        Err(err) => warn!(key, %err, "could not encode record"),
    }
}
