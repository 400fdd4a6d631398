use stakepick_lib::{sample_validators, SortKey, StaticSource, Validator};
use stakepick_tui::{Confirm, Focus, SelectDialog};

fn source(n: usize) -> StaticSource {
    let validators = (0..n)
        .map(|i| Validator::new(format!("node-{i:02}"), "", 1.0, 3.0 + i as f64, 100.0, 1.0))
        .collect();
    StaticSource::new(validators)
}

#[test]
fn test_open_starts_from_defaults() {
    let dialog = SelectDialog::open(&source(8));
    assert_eq!(dialog.cursor(), 0);
    assert_eq!(dialog.table().page_index(), 0);
    assert_eq!(dialog.table().selected(), None);
    assert_eq!(dialog.last_emitted(), None);
}

#[test]
fn test_confirm_without_selection() {
    let dialog = SelectDialog::open(&source(3));
    assert_eq!(dialog.confirm(), Confirm::NoSelection);
}

#[test]
fn test_activate_then_confirm_round_trip() {
    let mut dialog = SelectDialog::open(&source(3));
    dialog.cursor_down();

    let emitted = dialog.activate_cursor().expect("cursor on a row");
    assert_eq!(emitted.name, "node-01");
    assert_eq!(dialog.last_emitted(), Some("node-01"));

    match dialog.confirm() {
        Confirm::Selected(validator) => assert_eq!(validator, emitted),
        Confirm::NoSelection => panic!("selection was made"),
    }
}

#[test]
fn test_cursor_clamps_to_visible_page() {
    let mut dialog = SelectDialog::open(&source(7));
    for _ in 0..20 {
        dialog.cursor_down();
    }
    assert_eq!(dialog.cursor(), 4);

    // Last page has two rows; the cursor must land on one of them.
    dialog.next_page();
    assert!(dialog.cursor() <= 1);
    assert!(dialog.cursor_row().is_some());
}

#[test]
fn test_cursor_up_stops_at_zero() {
    let mut dialog = SelectDialog::open(&source(3));
    dialog.cursor_up();
    assert_eq!(dialog.cursor(), 0);
}

#[test]
fn test_resort_keeps_cursor_on_a_row() {
    let mut dialog = SelectDialog::open(&source(7));
    dialog.next_page();
    dialog.request_sort(SortKey::Apr);
    // Sorting resets to page 0, which is full again.
    assert_eq!(dialog.table().page_index(), 0);
    assert!(dialog.cursor_row().is_some());
}

#[test]
fn test_cycle_page_size_wraps_and_resets() {
    let mut dialog = SelectDialog::open(&StaticSource::new(sample_validators()));
    dialog.next_page();
    assert_eq!(dialog.table().page_index(), 1);

    dialog.cycle_page_size();
    assert_eq!(dialog.table().page_size(), 10);
    assert_eq!(dialog.table().page_index(), 0);

    dialog.cycle_page_size();
    assert_eq!(dialog.table().page_size(), 25);
    dialog.cycle_page_size();
    assert_eq!(dialog.table().page_size(), 5);
}

#[test]
fn test_focus_cycles_between_table_and_confirm_action() {
    let mut dialog = SelectDialog::open(&source(7));
    assert_eq!(dialog.focus(), Focus::Table);

    dialog.cycle_focus();
    assert_eq!(dialog.focus(), Focus::ConfirmAction);
    dialog.cycle_focus();
    assert_eq!(dialog.focus(), Focus::Table);
}

#[test]
fn test_table_keys_reclaim_focus_from_confirm_action() {
    let mut dialog = SelectDialog::open(&source(7));

    dialog.cycle_focus();
    dialog.cursor_down();
    assert_eq!(dialog.focus(), Focus::Table);

    dialog.cycle_focus();
    dialog.next_page();
    assert_eq!(dialog.focus(), Focus::Table);

    dialog.cycle_focus();
    dialog.request_sort(SortKey::Apr);
    assert_eq!(dialog.focus(), Focus::Table);

    dialog.cycle_focus();
    dialog.cycle_page_size();
    assert_eq!(dialog.focus(), Focus::Table);
}

#[test]
fn test_selection_does_not_leak_across_opens() {
    let source = source(3);
    let mut first = SelectDialog::open(&source);
    first.activate_cursor();
    assert!(first.table().selected().is_some());

    let second = SelectDialog::open(&source);
    assert_eq!(second.table().selected(), None);
}
