use stakepick_tui::draw::draw;
use stakepick_tui::ui::Buffer;
use stakepick_tui::{App, Key, Modifiers, Theme};

fn press(app: &mut App, key: Key) {
    app.handle_key(key, Modifiers::default());
}

fn render(app: &App) -> Vec<String> {
    let theme = Theme::dark();
    let mut buffer = Buffer::new(80, 30);
    draw(app, &theme, &mut buffer);

    (0..buffer.height())
        .map(|y| {
            (0..buffer.width())
                .filter_map(|x| buffer.get(x, y))
                .filter(|cell| !cell.wide_continuation)
                .map(|cell| cell.ch)
                .collect()
        })
        .collect()
}

fn screen_contains(lines: &[String], needle: &str) -> bool {
    lines.iter().any(|line| line.contains(needle))
}

#[test]
fn test_home_screen_renders_prompt() {
    let app = App::new();
    let lines = render(&app);
    assert!(screen_contains(&lines, "NOM Staking"));
    assert!(screen_contains(&lines, "Press Enter to select a validator node"));
}

#[test]
fn test_dialog_renders_table_and_footer() {
    let mut app = App::new();
    press(&mut app, Key::Enter);

    let lines = render(&app);
    assert!(screen_contains(&lines, "Select Validator node"));
    assert!(screen_contains(&lines, "Coinbase Custody"));
    assert!(screen_contains(&lines, "3.54%"));
    assert!(screen_contains(&lines, "23,095.22"));
    assert!(screen_contains(&lines, "Voting Power"));
    assert!(screen_contains(&lines, "Rows per page: 5"));
    assert!(screen_contains(&lines, "1–5 of 8"));
    assert!(screen_contains(&lines, "NOM Balance 23.20931 = 16,208.04 $"));
    assert!(screen_contains(&lines, "[Tab] focus"));
}

#[test]
fn test_sort_indicator_follows_request() {
    let mut app = App::new();
    press(&mut app, Key::Enter);
    press(&mut app, Key::Char('a'));

    let lines = render(&app);
    assert!(screen_contains(&lines, "APR [a] ▲"));

    press(&mut app, Key::Char('a'));
    let lines = render(&app);
    assert!(screen_contains(&lines, "APR [a] ▼"));
}

#[test]
fn test_second_page_shows_trailing_range() {
    let mut app = App::new();
    press(&mut app, Key::Enter);
    press(&mut app, Key::Right);

    let lines = render(&app);
    assert!(screen_contains(&lines, "6–8 of 8"));
}

#[test]
fn test_warning_notice_renders_over_dialog() {
    let mut app = App::new();
    press(&mut app, Key::Enter);
    press(&mut app, Key::Char('c'));

    let lines = render(&app);
    assert!(screen_contains(&lines, "Please select a validator."));
    assert!(screen_contains(&lines, "Press any key to continue"));
}
