//! Match history: immutable snapshots plus the filter/sort query over them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::rounds::{FestaModeMap, PLAYERS};
use crate::domain::table::ScoreTable;
use crate::errors::domain::{DomainError, ValidationKind};

/// One player's finalized name and total, as stored at save time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalScore {
    pub name: String,
    pub score: i16,
}

/// Snapshot of a completed match. Every field is copied at creation; later
/// changes to the live session cannot reach it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchHistoryEntry {
    /// Creation timestamp in milliseconds; doubles as the unique id.
    pub id: i64,
    /// Human-readable creation date.
    pub date: String,
    pub players: [String; PLAYERS],
    pub scores: [FinalScore; PLAYERS],
    pub table: ScoreTable,
    pub festa_modes: FestaModeMap,
}

impl MatchHistoryEntry {
    /// Winning score of the entry: max over its stored totals.
    pub fn winner_score(&self) -> i16 {
        self.scores.iter().map(|s| s.score).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistorySort {
    #[default]
    DateDesc,
    DateAsc,
    WinnerDesc,
    WinnerAsc,
}

impl HistorySort {
    pub fn as_str(self) -> &'static str {
        match self {
            HistorySort::DateDesc => "date_desc",
            HistorySort::DateAsc => "date_asc",
            HistorySort::WinnerDesc => "winner_desc",
            HistorySort::WinnerAsc => "winner_asc",
        }
    }
}

impl fmt::Display for HistorySort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HistorySort {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date_desc" => Ok(HistorySort::DateDesc),
            "date_asc" => Ok(HistorySort::DateAsc),
            "winner_desc" => Ok(HistorySort::WinnerDesc),
            "winner_asc" => Ok(HistorySort::WinnerAsc),
            other => Err(DomainError::validation(
                ValidationKind::Other(format!("unknown sort mode: {other}")),
                format!("Unknown sort mode: {other}"),
            )),
        }
    }
}

/// Case-insensitive substring filter over player names, then a stable sort.
///
/// The query is checked against both the players list and the finalized
/// score-name list; the two are expected identical but both are consulted.
/// A blank query matches every entry.
pub fn filter_and_sort(
    history: &[MatchHistoryEntry],
    query: &str,
    sort: HistorySort,
) -> Vec<MatchHistoryEntry> {
    let q = query.trim().to_lowercase();

    let mut out: Vec<MatchHistoryEntry> = history
        .iter()
        .filter(|entry| q.is_empty() || matches_query(entry, &q))
        .cloned()
        .collect();

    match sort {
        HistorySort::DateDesc => out.sort_by(|a, b| b.id.cmp(&a.id)),
        HistorySort::DateAsc => out.sort_by(|a, b| a.id.cmp(&b.id)),
        HistorySort::WinnerDesc => out.sort_by(|a, b| b.winner_score().cmp(&a.winner_score())),
        HistorySort::WinnerAsc => out.sort_by(|a, b| a.winner_score().cmp(&b.winner_score())),
    }

    out
}

fn matches_query(entry: &MatchHistoryEntry, q: &str) -> bool {
    let in_players = entry
        .players
        .iter()
        .any(|name| name.to_lowercase().contains(q));
    let in_scores = entry
        .scores
        .iter()
        .any(|s| s.name.to_lowercase().contains(q));
    in_players || in_scores
}
