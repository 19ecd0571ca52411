//! Property tests for entry validation (pure domain).
//!
//! Ruleset contract:
//! - Empty and "-" are always accepted and never advance
//! - Festa entries are legal exactly on [-15, 25]
//! - Standard entries are legal on [0, max] and the row sum never exceeds max
//!   when every write goes through validation

use proptest::prelude::*;

use crate::domain::rounds::{round_def, RoundId, RoundKind, PLAYERS};
use crate::domain::table::Cell;
use crate::domain::test_prelude;
use crate::domain::validation::{validate_entry, FESTA_MAX, FESTA_MIN};
use crate::errors::domain::{DomainError, ValidationKind};

fn standard_round() -> impl Strategy<Value = RoundId> {
    prop::sample::select(vec![
        RoundId::Vazas,
        RoundId::Copas,
        RoundId::Damas,
        RoundId::Reis,
        RoundId::ReiCopas,
        RoundId::Ultimas,
    ])
}

fn festa_round() -> impl Strategy<Value = RoundId> {
    prop::sample::select(vec![RoundId::F1, RoundId::F2, RoundId::F3, RoundId::F4])
}

fn max_units_of(id: RoundId) -> i64 {
    match round_def(id).kind {
        RoundKind::Standard { max_units, .. } => i64::from(max_units),
        RoundKind::Festa { .. } => panic!("standard round expected"),
    }
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: festa entries are accepted exactly on [-15, 25].
    #[test]
    fn prop_festa_accepts_iff_in_range(
        id in festa_round(),
        value in -100i64..=100,
    ) {
        let row = [Cell::Empty; PLAYERS];
        let result = validate_entry(round_def(id), &value.to_string(), &row, 0, false);

        if (FESTA_MIN..=FESTA_MAX).contains(&value) {
            let outcome = result.expect("in-range festa value must be accepted");
            prop_assert_eq!(outcome.cell, Cell::Value(value as i16));
            prop_assert!(outcome.advance);
        } else {
            let err = result.expect_err("out-of-range festa value must be rejected");
            prop_assert!(matches!(
                err,
                DomainError::Validation(ValidationKind::FestaRangeExceeded, _)
            ));
        }
    }

    /// Property: standard entries on an empty row are accepted exactly on [0, max].
    #[test]
    fn prop_standard_accepts_iff_within_own_max(
        id in standard_round(),
        value in -30i64..=30,
    ) {
        let row = [Cell::Empty; PLAYERS];
        let max = max_units_of(id);
        let result = validate_entry(round_def(id), &value.to_string(), &row, 0, false);

        if (0..=max).contains(&value) {
            let outcome = result.expect("in-range standard value must be accepted");
            prop_assert_eq!(outcome.cell, Cell::Value(value as i16));
            prop_assert!(outcome.advance);
        } else {
            let err = result.expect_err("out-of-range standard value must be rejected");
            prop_assert!(matches!(
                err,
                DomainError::Validation(ValidationKind::LimitOrSumExceeded, _)
            ));
        }
    }

    /// Property: a row populated only through validation never exceeds max,
    /// whatever sequence of edits is attempted.
    #[test]
    fn prop_sum_invariant_is_unviolatable_via_validation(
        id in standard_round(),
        edits in prop::collection::vec((0u8..PLAYERS as u8, -5i64..=20), 0..24),
    ) {
        let def = round_def(id);
        let max = max_units_of(id);
        let mut row = [Cell::Empty; PLAYERS];

        for (seat, value) in edits {
            if let Ok(outcome) = validate_entry(def, &value.to_string(), &row, seat, false) {
                row[seat as usize] = outcome.cell;
            }
            let sum: i64 = row.iter().filter_map(|c| c.numeric()).map(i64::from).sum();
            prop_assert!(sum <= max, "row sum {sum} exceeded max {max}");
        }
    }

    /// Property: input without digits is rejected as NotANumber for any round.
    #[test]
    fn prop_non_numeric_input_is_rejected(
        id in prop::sample::select(RoundId::ALL.to_vec()),
        raw in "[a-zA-Z!. ]{1,8}",
    ) {
        prop_assume!(raw != "-" && !raw.is_empty());

        let row = [Cell::Empty; PLAYERS];
        let err = validate_entry(round_def(id), &raw, &row, 0, false)
            .expect_err("non-numeric input must be rejected");
        prop_assert!(matches!(
            err,
            DomainError::Validation(ValidationKind::NotANumber, _)
        ));
    }

    /// Property: while locked, every entry is rejected and no kind leaks a
    /// row message for it.
    #[test]
    fn prop_locked_rejects_everything(
        id in prop::sample::select(RoundId::ALL.to_vec()),
        raw in prop::sample::select(vec!["", "-", "0", "3", "abc"]),
    ) {
        let row = [Cell::Empty; PLAYERS];
        let err = validate_entry(round_def(id), raw, &row, 0, true)
            .expect_err("locked edits must be rejected");
        prop_assert!(matches!(
            err,
            DomainError::Validation(ValidationKind::EditLocked, _)
        ));
        prop_assert!(ValidationKind::EditLocked.row_message().is_none());
    }
}
