//! Cell entry validation: legality rules evaluated in a fixed order.
//!
//! Rejections never mutate stored state; callers keep the prior cell value
//! and surface a transient row-scoped message where the kind provides one.

use lazy_regex::regex_is_match;

use crate::domain::rounds::{RoundDef, RoundKind, PLAYERS};
use crate::domain::state::Seat;
use crate::domain::table::Cell;
use crate::errors::domain::{DomainError, ValidationKind};

/// Inclusive legal range for festa entries.
pub const FESTA_MIN: i64 = -15;
pub const FESTA_MAX: i64 = 25;

/// Accepted entry plus whether it is eligible to auto-advance focus.
///
/// Empty and dash entries are stored verbatim but never advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryOutcome {
    pub cell: Cell,
    pub advance: bool,
}

/// Validate a proposed raw value for one cell.
///
/// `row` is the round's current raw row (the edited seat's prior value is
/// ignored; the other three participate in the standard-round sum check).
pub fn validate_entry(
    def: &RoundDef,
    raw: &str,
    row: &[Cell; PLAYERS],
    seat: Seat,
    locked: bool,
) -> Result<EntryOutcome, DomainError> {
    if locked {
        return Err(DomainError::validation(
            ValidationKind::EditLocked,
            "Editing is locked",
        ));
    }

    if seat as usize >= PLAYERS {
        return Err(DomainError::validation(
            ValidationKind::InvalidSeat,
            format!("Invalid seat: {seat}"),
        ));
    }

    // Empty and the dash placeholder are always stored verbatim.
    if raw.is_empty() {
        return Ok(EntryOutcome {
            cell: Cell::Empty,
            advance: false,
        });
    }
    if raw == "-" {
        return Ok(EntryOutcome {
            cell: Cell::Dash,
            advance: false,
        });
    }

    let cleaned = raw.trim();
    if !regex_is_match!(r"^-?\d+$", cleaned) {
        return Err(DomainError::validation(
            ValidationKind::NotANumber,
            format!("Not a number: {raw}"),
        ));
    }

    // The regex guarantees digits; a parse failure can only mean overflow,
    // which is out of range for every round kind.
    let value = cleaned.parse::<i64>();

    match def.kind {
        RoundKind::Festa { .. } => {
            let value = value.ok().filter(|v| (FESTA_MIN..=FESTA_MAX).contains(v));
            let Some(value) = value else {
                return Err(DomainError::validation(
                    ValidationKind::FestaRangeExceeded,
                    format!("Festa value out of [{FESTA_MIN}, {FESTA_MAX}]: {cleaned}"),
                ));
            };
            Ok(EntryOutcome {
                cell: Cell::Value(value as i16),
                advance: true,
            })
        }
        RoundKind::Standard { max_units, .. } => {
            let max = i64::from(max_units);
            let value = value.ok().filter(|v| (0..=max).contains(v));
            let Some(value) = value else {
                return Err(DomainError::validation(
                    ValidationKind::LimitOrSumExceeded,
                    format!("Value out of [0, {max}]: {cleaned}"),
                ));
            };

            let sum_others: i64 = row
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != seat as usize)
                .filter_map(|(_, c)| c.numeric())
                .map(i64::from)
                .sum();
            if sum_others + value > max {
                return Err(DomainError::validation(
                    ValidationKind::LimitOrSumExceeded,
                    format!("Row sum {} exceeds max {max}", sum_others + value),
                ));
            }

            Ok(EntryOutcome {
                cell: Cell::Value(value as i16),
                advance: true,
            })
        }
    }
}
