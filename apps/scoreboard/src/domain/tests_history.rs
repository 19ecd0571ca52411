use crate::domain::history::{filter_and_sort, HistorySort};
use crate::domain::test_state_helpers::history_entry;

#[test]
fn blank_query_matches_everything_sorted_by_date_desc() {
    let history = vec![
        history_entry(1, ["ANA", "BRUNO", "CARLA", "DINO"], [10, 0, 0, 0]),
        history_entry(3, ["EVA", "FILIPE", "GIL", "HUGO"], [5, 0, 0, 0]),
        history_entry(2, ["IVO", "JOANA", "KIKO", "LARA"], [7, 0, 0, 0]),
    ];

    let out = filter_and_sort(&history, "", HistorySort::DateDesc);
    let ids: Vec<i64> = out.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);

    let out = filter_and_sort(&history, "   ", HistorySort::DateDesc);
    assert_eq!(out.len(), 3, "whitespace-only query matches everything");
}

#[test]
fn date_sorts_are_exact_reverses_without_ties() {
    let history = vec![
        history_entry(5, ["A", "B", "C", "D"], [0; 4]),
        history_entry(9, ["A", "B", "C", "D"], [0; 4]),
        history_entry(7, ["A", "B", "C", "D"], [0; 4]),
    ];

    let desc: Vec<i64> = filter_and_sort(&history, "", HistorySort::DateDesc)
        .iter()
        .map(|e| e.id)
        .collect();
    let mut asc: Vec<i64> = filter_and_sort(&history, "", HistorySort::DateAsc)
        .iter()
        .map(|e| e.id)
        .collect();
    asc.reverse();
    assert_eq!(desc, asc);
}

#[test]
fn query_is_a_case_insensitive_substring_over_player_names() {
    let history = vec![
        history_entry(1, ["ANA", "BRUNO", "CARLA", "DINO"], [0; 4]),
        history_entry(2, ["EVA", "FILIPE", "GIL", "HUGO"], [0; 4]),
    ];

    let out = filter_and_sort(&history, "bru", HistorySort::DateDesc);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, 1);

    let out = filter_and_sort(&history, "FIL", HistorySort::DateDesc);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, 2);
}

#[test]
fn query_matching_nobody_returns_an_empty_sequence() {
    let history = vec![history_entry(1, ["ANA", "BRUNO", "CARLA", "DINO"], [0; 4])];
    assert!(filter_and_sort(&history, "zzz", HistorySort::DateDesc).is_empty());
}

#[test]
fn query_also_checks_the_finalized_score_names() {
    // The two lists are expected identical, but both are consulted.
    let mut entry = history_entry(1, ["ANA", "BRUNO", "CARLA", "DINO"], [0; 4]);
    entry.scores[0].name = "ZULMIRA".to_string();
    let history = vec![entry];

    let out = filter_and_sort(&history, "zulmira", HistorySort::DateDesc);
    assert_eq!(out.len(), 1);
}

#[test]
fn winner_sorts_use_the_entries_maximum_total() {
    let history = vec![
        history_entry(1, ["A", "B", "C", "D"], [100, -400, 0, 0]),
        history_entry(2, ["A", "B", "C", "D"], [-50, 350, 0, 0]),
        history_entry(3, ["A", "B", "C", "D"], [200, 0, 0, 0]),
    ];

    let desc: Vec<i64> = filter_and_sort(&history, "", HistorySort::WinnerDesc)
        .iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(desc, vec![2, 3, 1]);

    let asc: Vec<i64> = filter_and_sort(&history, "", HistorySort::WinnerAsc)
        .iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(asc, vec![1, 3, 2]);
}

#[test]
fn winner_ties_keep_input_order() {
    // Stable sort: equal keys preserve the original sequence.
    let history = vec![
        history_entry(1, ["A", "B", "C", "D"], [100, 0, 0, 0]),
        history_entry(2, ["A", "B", "C", "D"], [100, 0, 0, 0]),
        history_entry(3, ["A", "B", "C", "D"], [50, 0, 0, 0]),
    ];

    let desc: Vec<i64> = filter_and_sort(&history, "", HistorySort::WinnerDesc)
        .iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(desc, vec![1, 2, 3]);
}

#[test]
fn winner_score_is_the_maximum_stored_total() {
    let entry = history_entry(1, ["A", "B", "C", "D"], [-100, -400, -20, -350]);
    assert_eq!(entry.winner_score(), -20);
}

#[test]
fn sort_mode_parses_its_string_forms() {
    for sort in [
        HistorySort::DateDesc,
        HistorySort::DateAsc,
        HistorySort::WinnerDesc,
        HistorySort::WinnerAsc,
    ] {
        assert_eq!(sort.as_str().parse::<HistorySort>().unwrap(), sort);
    }
    assert!("newest".parse::<HistorySort>().is_err());
}
