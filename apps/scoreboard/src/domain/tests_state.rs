use crate::domain::rounds::{RoundId, PLAYERS};
use crate::domain::state::{default_players, GameSession};
use crate::domain::table::Cell;
use crate::domain::test_state_helpers::{active_session, fill_row, finished_session};

#[test]
fn new_sessions_are_inactive_with_placeholder_names() {
    let session = GameSession::new();
    assert!(!session.active);
    assert!(!session.locked);
    assert_eq!(session.players, default_players());
    assert_eq!(session.players[0], "JOGADOR 1");
    assert_eq!(session.completed_count(), 0);
    assert!(!session.game_finished());
}

#[test]
fn game_finished_requires_active_and_every_round_full() {
    let mut session = finished_session();
    assert!(session.game_finished());

    session.active = false;
    assert!(!session.game_finished());

    let mut session = active_session();
    assert!(!session.game_finished());
    fill_row(&mut session, RoundId::Vazas, [0; PLAYERS]);
    assert!(!session.game_finished());
}

#[test]
fn dealer_rotates_with_completed_rounds_while_active() {
    let mut session = active_session();
    assert_eq!(session.dealer(), 0);

    for (i, id) in RoundId::ALL.iter().enumerate().take(5) {
        fill_row(&mut session, *id, [0; PLAYERS]);
        session.refresh_dealer();
        assert_eq!(session.dealer(), ((i + 1) % PLAYERS) as u8);
    }
}

#[test]
fn dealer_freezes_once_the_session_is_inactive() {
    let mut session = active_session();
    fill_row(&mut session, RoundId::Vazas, [0; PLAYERS]);
    session.refresh_dealer();
    assert_eq!(session.dealer(), 1);

    session.active = false;
    fill_row(&mut session, RoundId::Copas, [0; PLAYERS]);
    session.refresh_dealer();
    assert_eq!(session.dealer(), 1);
}

#[test]
fn start_keeps_a_reloaded_table_and_unlocks() {
    let mut session = GameSession::new();
    session.table.set_cell(RoundId::Vazas, 0, Cell::Value(2));
    session.locked = true;

    session.start();
    assert!(session.active);
    assert!(!session.locked);
    assert_eq!(session.table.cell(RoundId::Vazas, 0), Cell::Value(2));
}

#[test]
fn reset_discards_the_table_and_deactivates() {
    let mut session = finished_session();
    session.locked = true;
    session.reset();

    assert!(!session.active);
    assert!(!session.locked);
    assert_eq!(session.completed_count(), 0);
    assert_eq!(session.dealer(), 0);
}
