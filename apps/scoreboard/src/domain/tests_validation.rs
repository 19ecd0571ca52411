use crate::domain::rounds::{round_def, RoundId, PLAYERS};
use crate::domain::table::Cell;
use crate::domain::validation::{validate_entry, EntryOutcome};
use crate::errors::domain::{DomainError, ValidationKind};

fn empty_row() -> [Cell; PLAYERS] {
    [Cell::Empty; PLAYERS]
}

fn kind_of(err: DomainError) -> ValidationKind {
    match err {
        DomainError::Validation(kind, _) => kind,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn locked_edits_are_rejected_first() {
    let def = round_def(RoundId::Vazas);
    let err = validate_entry(def, "3", &empty_row(), 0, true).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::EditLocked);
}

#[test]
fn empty_and_dash_are_accepted_without_advance() {
    let def = round_def(RoundId::Vazas);

    let outcome = validate_entry(def, "", &empty_row(), 0, false).unwrap();
    assert_eq!(
        outcome,
        EntryOutcome {
            cell: Cell::Empty,
            advance: false
        }
    );

    let outcome = validate_entry(def, "-", &empty_row(), 0, false).unwrap();
    assert_eq!(
        outcome,
        EntryOutcome {
            cell: Cell::Dash,
            advance: false
        }
    );
}

#[test]
fn dash_is_accepted_in_festa_rounds_too() {
    let def = round_def(RoundId::F1);
    let outcome = validate_entry(def, "-", &empty_row(), 2, false).unwrap();
    assert_eq!(outcome.cell, Cell::Dash);
    assert!(!outcome.advance);
}

#[test]
fn non_numeric_input_is_rejected() {
    let def = round_def(RoundId::Copas);
    for raw in ["12a", "1.5", "+3", "- ", "--2", "abc"] {
        let err = validate_entry(def, raw, &empty_row(), 0, false).unwrap_err();
        assert_eq!(kind_of(err), ValidationKind::NotANumber, "raw {raw:?}");
    }
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    let def = round_def(RoundId::Copas);
    let outcome = validate_entry(def, " 3 ", &empty_row(), 0, false).unwrap();
    assert_eq!(outcome.cell, Cell::Value(3));
    assert!(outcome.advance);
}

#[test]
fn festa_values_must_stay_within_range() {
    let def = round_def(RoundId::F2);

    for raw in ["-15", "0", "25"] {
        let outcome = validate_entry(def, raw, &empty_row(), 1, false).unwrap();
        assert!(outcome.advance, "raw {raw:?}");
    }

    for raw in ["-16", "26", "100"] {
        let err = validate_entry(def, raw, &empty_row(), 1, false).unwrap_err();
        assert_eq!(kind_of(err), ValidationKind::FestaRangeExceeded, "raw {raw:?}");
    }
}

#[test]
fn standard_values_must_stay_within_their_own_max() {
    let def = round_def(RoundId::ReiCopas); // max 1

    assert!(validate_entry(def, "1", &empty_row(), 0, false).is_ok());

    let err = validate_entry(def, "2", &empty_row(), 0, false).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::LimitOrSumExceeded);

    let err = validate_entry(def, "-1", &empty_row(), 0, false).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::LimitOrSumExceeded);
}

#[test]
fn damas_row_sum_rejects_then_accepts_the_final_seat() {
    // Seats 0..2 hold 1,1,1; max is 4. Entering 2 for seat 3 exceeds the
    // combined max, entering 1 completes the round exactly.
    let def = round_def(RoundId::Damas);
    let row = [Cell::Value(1), Cell::Value(1), Cell::Value(1), Cell::Empty];

    let err = validate_entry(def, "2", &row, 3, false).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::LimitOrSumExceeded);

    let outcome = validate_entry(def, "1", &row, 3, false).unwrap();
    assert_eq!(outcome.cell, Cell::Value(1));
    assert!(outcome.advance);
}

#[test]
fn the_edited_seats_prior_value_does_not_count_towards_the_sum() {
    let def = round_def(RoundId::Damas);
    let row = [Cell::Value(4), Cell::Empty, Cell::Empty, Cell::Empty];

    // Re-entering seat 0 replaces its old 4; the other seats sum to 0.
    let outcome = validate_entry(def, "3", &row, 0, false).unwrap();
    assert_eq!(outcome.cell, Cell::Value(3));
}

#[test]
fn dash_cells_count_as_zero_in_the_sum_check() {
    let def = round_def(RoundId::Ultimas); // max 2
    let row = [Cell::Dash, Cell::Dash, Cell::Empty, Cell::Empty];
    assert!(validate_entry(def, "2", &row, 2, false).is_ok());
}

#[test]
fn absurdly_long_digit_strings_are_out_of_range_not_malformed() {
    let raw = "999999999999999999999999";

    let err = validate_entry(round_def(RoundId::Vazas), raw, &empty_row(), 0, false).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::LimitOrSumExceeded);

    let err = validate_entry(round_def(RoundId::F1), raw, &empty_row(), 0, false).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::FestaRangeExceeded);
}

#[test]
fn invalid_seats_are_rejected() {
    let def = round_def(RoundId::Vazas);
    let err = validate_entry(def, "3", &empty_row(), 4, false).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::InvalidSeat);
}

#[test]
fn row_messages_exist_only_for_row_scoped_kinds() {
    assert!(ValidationKind::NotANumber.row_message().is_some());
    assert!(ValidationKind::FestaRangeExceeded.row_message().is_some());
    assert!(ValidationKind::LimitOrSumExceeded.row_message().is_some());
    assert!(ValidationKind::EditLocked.row_message().is_none());
}
