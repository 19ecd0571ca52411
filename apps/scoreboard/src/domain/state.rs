//! Live game session state and derived views.

use crate::domain::rounds::{FestaModeMap, RoundId, PLAYERS};
use crate::domain::scoring;
use crate::domain::table::ScoreTable;

pub type Seat = u8; // 0..=3

/// Placeholder names shown before anyone types a real one.
pub fn default_players() -> [String; PLAYERS] {
    std::array::from_fn(|i| format!("JOGADOR {}", i + 1))
}

/// Transient state of the match in progress. Not a snapshot: history entries
/// deep-copy out of this at save time.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    /// Inactive sessions are in pre-game name entry.
    pub active: bool,
    /// User-facing edit lock; rejected edits report `EditLocked`.
    pub locked: bool,
    pub players: [String; PLAYERS],
    pub table: ScoreTable,
    pub festa_modes: FestaModeMap,
    /// Refreshed from completed rounds while active, frozen once inactive.
    dealer: Seat,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            active: false,
            locked: false,
            players: default_players(),
            table: ScoreTable::empty(),
            festa_modes: FestaModeMap::new(),
            dealer: 0,
        }
    }

    pub fn completed_count(&self) -> usize {
        self.table.completed_count()
    }

    pub fn next_incomplete_round(&self) -> Option<RoundId> {
        self.table.next_incomplete_round()
    }

    /// Finished means active with every round full.
    pub fn game_finished(&self) -> bool {
        self.active && self.table.next_incomplete_round().is_none()
    }

    pub fn totals(&self) -> [i16; PLAYERS] {
        scoring::totals(&self.table, &self.festa_modes)
    }

    pub fn leaders(&self) -> Vec<Seat> {
        scoring::leaders(&self.totals())
    }

    pub fn dealer(&self) -> Seat {
        self.dealer
    }

    /// Dealer rotates with completed rounds while the game is active.
    pub(crate) fn refresh_dealer(&mut self) {
        if self.active {
            self.dealer = (self.completed_count() % PLAYERS) as Seat;
        }
    }

    /// Activate the session. A table reloaded from storage is kept; only the
    /// lock is released.
    pub(crate) fn start(&mut self) {
        self.active = true;
        self.locked = false;
        self.refresh_dealer();
    }

    /// Discard the match in progress and return to pre-game entry.
    pub(crate) fn reset(&mut self) {
        self.table = ScoreTable::empty();
        self.active = false;
        self.locked = false;
        self.dealer = 0;
    }
}
