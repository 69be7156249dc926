//! Acceptance tests: record store text in, selected connection out.
//!
//! These drive the public API the way the binary does, minus the terminal:
//! decode YAML, normalize into records, then filter, sort and commit through
//! `AppState`.

use sshpick::model::{Column, KeyAction, Record, RecordId};
use sshpick::source::{parse_entries, records_from_entries};
use sshpick::state::{handle_action, ActionOutcome, AppState, InputField};
use std::path::Path;

// ===== Test Helpers =====

fn load(yaml: &str) -> Vec<Record> {
    let entries = parse_entries(Path::new("test.yml"), yaml).expect("valid store");
    records_from_entries(entries)
}

fn press(state: &mut AppState, actions: &[KeyAction]) -> ActionOutcome {
    let mut outcome = ActionOutcome::Continue;
    for action in actions {
        outcome = handle_action(state, *action);
    }
    outcome
}

fn type_text(state: &mut AppState, text: &str) {
    for ch in text.chars() {
        handle_action(state, KeyAction::Insert(ch));
    }
}

fn screen(state: &AppState) -> String {
    state
        .visible_lines()
        .iter()
        .map(|line| line.text.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

const TWO_HOSTS: &str = "\
zeta:
  user: a
  address: 1.1.1.1
alpha:
  user: b
  address: 2.2.2.2
";

const EXAMPLE_STORE: &str = "\
border router:
  address: 192.168.1.1
  comment: My border router
  user: admin
test server:
  address: test.example.com
  user: root
";

// ===== End-to-end scenario =====

#[test]
fn load_orders_by_name_and_composes_commands() {
    let records = load(TWO_HOSTS);
    assert_eq!(
        records,
        vec![
            Record::new(RecordId::new(0), "alpha", "b@2.2.2.2", ""),
            Record::new(RecordId::new(1), "zeta", "a@1.1.1.1", ""),
        ]
    );
}

#[test]
fn filter_then_commit_selects_single_match() {
    let mut state = AppState::new(load(TWO_HOSTS), 10, 80);
    type_text(&mut state, "b@");

    assert_eq!(state.results().len(), 1);
    assert_eq!(state.results()[0].id, RecordId::new(0));
    assert_eq!(state.marker_line(), 0);

    match press(&mut state, &[KeyAction::Commit]) {
        ActionOutcome::Connect(record) => assert_eq!(record.command(), "b@2.2.2.2"),
        other => panic!("expected Connect, got {other:?}"),
    }
}

#[test]
fn rendered_store_matches_snapshot() {
    let state = AppState::new(load(EXAMPLE_STORE), 10, 80);
    insta::assert_snapshot!(screen(&state), @r"
    0    border router    admin@192.168.1.1        My border router
    1    test server      root@test.example.com
    ");
}

// ===== Filter semantics =====

#[test]
fn filter_tokens_are_anded() {
    let mut state = AppState::new(load(EXAMPLE_STORE), 10, 80);

    type_text(&mut state, "router");
    assert_eq!(state.results().len(), 1);
    assert_eq!(state.selected_id(), Some(RecordId::new(0)));

    type_text(&mut state, " test");
    assert!(state.results().is_empty());
    assert_eq!(state.selected_id(), None);
    assert_eq!(press(&mut state, &[KeyAction::Commit]), ActionOutcome::Continue);
}

#[test]
fn blank_filter_keeps_everything() {
    let mut state = AppState::new(load(EXAMPLE_STORE), 10, 80);
    type_text(&mut state, "   ");
    assert_eq!(state.results().len(), 2);
}

#[test]
fn uppercase_typing_matches_case_insensitively() {
    let mut state = AppState::new(load(EXAMPLE_STORE), 10, 80);
    type_text(&mut state, "ROOT");
    assert_eq!(state.input(InputField::Filter).text(), "root");
    assert_eq!(state.selected_id(), Some(RecordId::new(1)));
}

// ===== Direct selection =====

#[test]
fn direct_id_bounds_on_three_records() {
    let store = "\
a:
  user: u
  address: one
b:
  user: u
  address: two
c:
  user: u
  address: three
";
    let state = AppState::new(load(store), 10, 80);

    assert_eq!(state.lookup_direct("0").map(Record::command), Some("u@one"));
    assert_eq!(state.lookup_direct("1").map(Record::command), Some("u@two"));
    assert_eq!(state.lookup_direct("2").map(Record::command), Some("u@three"));
    assert!(state.lookup_direct("-1").is_none());
    assert!(state.lookup_direct("3").is_none());
    assert!(state.lookup_direct("two").is_none());
}

#[test]
fn direct_id_commit_ignores_filter_and_marker() {
    let mut state = AppState::new(load(EXAMPLE_STORE), 10, 80);
    type_text(&mut state, "router");
    press(&mut state, &[KeyAction::CycleFocus]);
    type_text(&mut state, "1");

    match press(&mut state, &[KeyAction::Commit]) {
        ActionOutcome::Connect(record) => assert_eq!(record.name(), "test server"),
        other => panic!("expected Connect, got {other:?}"),
    }
}

// ===== Sorting =====

#[test]
fn repeated_sort_reverses_then_restores() {
    let mut state = AppState::new(load(EXAMPLE_STORE), 10, 80);

    press(&mut state, &[KeyAction::SortBy(Column::Name)]);
    assert!(screen(&state).starts_with("1    test server"));

    press(&mut state, &[KeyAction::SortBy(Column::Name)]);
    assert!(screen(&state).starts_with("0    border router"));
}

#[test]
fn connection_field_rejects_non_digits() {
    let mut state = AppState::new(load(EXAMPLE_STORE), 10, 80);
    press(&mut state, &[KeyAction::CycleFocus, KeyAction::Insert('!')]);
    assert_eq!(state.input(InputField::Connection).text(), "");
}
