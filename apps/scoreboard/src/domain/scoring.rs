//! Round scoring and aggregation over the score table.

use crate::domain::rounds::{
    round_def, FestaMode, FestaModeMap, RoundDef, RoundId, RoundKind, PLAYERS,
};
use crate::domain::state::Seat;
use crate::domain::table::ScoreTable;

pub const FESTA_POSITIVE_UNIT: i16 = 25;
pub const FESTA_NEGATIVE_BASE: i16 = 325;
pub const FESTA_NEGATIVE_UNIT: i16 = 75;

/// Single scoring dispatch over the round's tagged kind.
///
/// Standard rounds ignore `mode`.
pub fn score_round(def: &RoundDef, units: i16, mode: FestaMode) -> i16 {
    match def.kind {
        RoundKind::Standard { unit_value, .. } => units * unit_value,
        RoundKind::Festa { .. } => match mode {
            FestaMode::Positive => units * FESTA_POSITIVE_UNIT,
            FestaMode::Negative => FESTA_NEGATIVE_BASE - units * FESTA_NEGATIVE_UNIT,
        },
    }
}

/// Points one cell contributes; unset and dash cells contribute 0.
///
/// `modes` is whichever festa-mode map applies: the live map for the current
/// game, or a snapshot's own copy when recomputing history.
pub fn points_for(id: RoundId, seat: Seat, table: &ScoreTable, modes: &FestaModeMap) -> i16 {
    let Some(units) = table.cell(id, seat).numeric() else {
        return 0;
    };
    let mode = modes.get(id).unwrap_or_default();
    score_round(round_def(id), units, mode)
}

/// Sum over all 10 rounds in catalog order.
pub fn total_for(seat: Seat, table: &ScoreTable, modes: &FestaModeMap) -> i16 {
    RoundId::ALL
        .iter()
        .map(|id| points_for(*id, seat, table, modes))
        .sum()
}

pub fn totals(table: &ScoreTable, modes: &FestaModeMap) -> [i16; PLAYERS] {
    std::array::from_fn(|seat| total_for(seat as Seat, table, modes))
}

/// Seats holding the maximum total; ties mark every tied seat.
pub fn leaders(totals: &[i16; PLAYERS]) -> Vec<Seat> {
    let max = totals.iter().copied().max().unwrap_or(0);
    totals
        .iter()
        .enumerate()
        .filter(|(_, t)| **t == max)
        .map(|(seat, _)| seat as Seat)
        .collect()
}
