//! Snapshotting a session into an immutable history entry.

use crate::domain::history::{FinalScore, MatchHistoryEntry};
use crate::domain::scoring::total_for;
use crate::domain::state::{GameSession, Seat};

/// Deep-copy the session into a history entry.
///
/// Finals are computed against the copied table and festa-mode map, so the
/// entry stays correct however the live session changes afterwards. `id` and
/// `date` come from the caller; the domain holds no clock.
pub fn snapshot_session(session: &GameSession, id: i64, date: String) -> MatchHistoryEntry {
    let table = session.table.clone();
    let festa_modes = session.festa_modes.clone();

    let scores = std::array::from_fn(|seat| FinalScore {
        name: session.players[seat].clone(),
        score: total_for(seat as Seat, &table, &festa_modes),
    });

    MatchHistoryEntry {
        id,
        date,
        players: session.players.clone(),
        scores,
        table,
        festa_modes,
    }
}
