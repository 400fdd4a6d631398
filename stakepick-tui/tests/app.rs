use stakepick_tui::{App, Flow, Key, Modifiers};

fn press(app: &mut App, key: Key) -> Flow {
    app.handle_key(key, Modifiers::default())
}

#[test]
fn test_enter_opens_dialog_q_quits_home() {
    let mut app = App::new();
    assert!(app.dialog().is_none());

    assert_eq!(press(&mut app, Key::Enter), Flow::Continue);
    assert!(app.dialog().is_some());

    let mut fresh = App::new();
    assert_eq!(press(&mut fresh, Key::Char('q')), Flow::Quit);
}

#[test]
fn test_escape_closes_dialog_without_confirming() {
    let mut app = App::new();
    press(&mut app, Key::Enter);
    press(&mut app, Key::Escape);
    assert!(app.dialog().is_none());
    assert!(app.notice().is_none());
}

#[test]
fn test_confirm_without_selection_warns_and_stays_open() {
    let mut app = App::new();
    press(&mut app, Key::Enter);
    press(&mut app, Key::Char('c'));

    let notice = app.notice().expect("warning notice");
    assert_eq!(notice.message, "Please select a validator.");
    assert!(app.dialog().is_some());

    // Dismissing the warning keeps the dialog open.
    press(&mut app, Key::Enter);
    assert!(app.notice().is_none());
    assert!(app.dialog().is_some());
}

#[test]
fn test_confirm_with_selection_closes_dialog() {
    let mut app = App::new();
    press(&mut app, Key::Enter);
    press(&mut app, Key::Down);
    press(&mut app, Key::Enter); // activate the row under the cursor
    press(&mut app, Key::Char('c'));

    let notice = app.notice().expect("confirmation notice");
    assert!(notice.message.starts_with("You have selected the validator"));
    assert!(app.dialog().is_some());

    // Dismissing the confirmation closes the dialog.
    press(&mut app, Key::Char('x'));
    assert!(app.notice().is_none());
    assert!(app.dialog().is_none());
}

#[test]
fn test_tab_focuses_confirm_action_and_enter_confirms() {
    let mut app = App::new();
    press(&mut app, Key::Enter);
    press(&mut app, Key::Enter); // activate the row under the cursor
    press(&mut app, Key::Tab);
    press(&mut app, Key::Enter);

    let notice = app.notice().expect("confirmation notice");
    assert!(notice.message.starts_with("You have selected the validator"));
}

#[test]
fn test_tab_enter_without_selection_warns() {
    let mut app = App::new();
    press(&mut app, Key::Enter);
    press(&mut app, Key::Tab);
    press(&mut app, Key::Enter);

    let notice = app.notice().expect("warning notice");
    assert_eq!(notice.message, "Please select a validator.");
    assert!(app.dialog().is_some());
}

#[test]
fn test_modified_char_shortcuts_are_ignored() {
    let mut app = App::new();
    press(&mut app, Key::Enter);

    let ctrl = Modifiers {
        ctrl: true,
        ..Modifiers::default()
    };
    app.handle_key(Key::Char('a'), ctrl);
    assert_eq!(
        app.dialog().expect("dialog open").table().sort_key(),
        stakepick_lib::SortKey::Name
    );

    let mut fresh = App::new();
    assert_eq!(fresh.handle_key(Key::Char('q'), ctrl), Flow::Continue);
}

#[test]
fn test_sort_and_paging_keys_reach_the_table() {
    let mut app = App::new();
    press(&mut app, Key::Enter);

    press(&mut app, Key::Char('a'));
    let dialog = app.dialog().expect("dialog open");
    assert_eq!(
        dialog.table().sort_key(),
        stakepick_lib::SortKey::Apr
    );

    press(&mut app, Key::Right);
    assert_eq!(app.dialog().expect("dialog open").table().page_index(), 1);

    press(&mut app, Key::Char('s'));
    let table = app.dialog().expect("dialog open").table();
    assert_eq!(table.page_size(), 10);
    assert_eq!(table.page_index(), 0);
}
