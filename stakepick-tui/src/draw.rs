//! Frame composition: home screen, dialog, table and notices.

use stakepick_lib::format::{amount, percent};
use stakepick_lib::{SortDirection, SortKey, TableState};

use crate::app::{App, Notice, NOM_BALANCE, NOM_BALANCE_USD};
use crate::dialog::{Focus, SelectDialog};
use crate::theme::Theme;
use crate::ui::text::{display_width, pad_left, truncate_to_width};
use crate::ui::{Buffer, Rgb};

const NAME_COL: u16 = 38;
const APR_COL: u16 = 10;
const DELEGATED_COL: u16 = 22;
const TABLE_WIDTH: u16 = NAME_COL + APR_COL + DELEGATED_COL;
const DIALOG_WIDTH: u16 = TABLE_WIDTH + 6;

pub fn draw(app: &App, theme: &Theme, buffer: &mut Buffer) {
    buffer.fill_rect(
        0,
        0,
        buffer.width(),
        buffer.height(),
        theme.foreground,
        theme.background,
    );
    draw_home(theme, buffer);

    if let Some(dialog) = app.dialog() {
        buffer.dim_all(0.5);
        draw_dialog(dialog, theme, buffer);
    }
    if let Some(notice) = app.notice() {
        buffer.dim_all(0.6);
        draw_notice(notice, theme, buffer);
    }
}

fn draw_home(theme: &Theme, buffer: &mut Buffer) {
    let (w, h) = (buffer.width(), buffer.height());
    let y = h / 3;
    put_centered(buffer, w, y, "NOM Staking", theme.accent, theme.background, true);
    put_centered(
        buffer,
        w,
        y + 2,
        "Press Enter to select a validator node",
        theme.muted,
        theme.background,
        false,
    );
    put_centered(
        buffer,
        w,
        y + 3,
        "q quits",
        theme.muted,
        theme.background,
        false,
    );
}

fn draw_dialog(dialog: &SelectDialog, theme: &Theme, buffer: &mut Buffer) {
    let (w, h) = (buffer.width(), buffer.height());
    let table = dialog.table();

    let dw = DIALOG_WIDTH.min(w);
    let dh = (table.page_size() as u16 + 11).min(h);
    let x0 = (w.saturating_sub(dw)) / 2;
    let y0 = (h.saturating_sub(dh)) / 2;

    buffer.fill_rect(x0, y0, dw, dh, theme.foreground, theme.surface);
    draw_border(buffer, x0, y0, dw, dh, theme.border, theme.surface);

    let x = x0 + 3;
    let iw = dw.saturating_sub(6);

    buffer.put_str(
        x,
        y0 + 1,
        "Select Validator node",
        theme.accent,
        theme.surface,
        true,
        false,
        iw,
    );
    put(
        buffer,
        x,
        y0 + 2,
        "As you gonna stake your NOMs, you need to select a",
        theme.muted,
        theme.surface,
        iw,
    );
    put(
        buffer,
        x,
        y0 + 3,
        "validator for it. Please choose one of the available nodes.",
        theme.muted,
        theme.surface,
        iw,
    );

    draw_header(table, theme, buffer, x, y0 + 5);
    draw_rows(dialog, theme, buffer, x, y0 + 6);

    let footer_y = y0 + 6 + table.page_size() as u16;
    draw_footer(table, theme, buffer, x, footer_y, iw);

    let selected_y = footer_y + 1;
    match table.selected_validator() {
        Some(validator) => put(
            buffer,
            x,
            selected_y,
            &format!("Selected: {}", validator.name),
            theme.accent,
            theme.surface,
            iw,
        ),
        None => put(
            buffer,
            x,
            selected_y,
            "No validator selected.",
            theme.muted,
            theme.surface,
            iw,
        ),
    }

    let balance_y = selected_y + 1;
    let balance = format!("NOM Balance {NOM_BALANCE} = {NOM_BALANCE_USD}");
    put(buffer, x, balance_y, &balance, theme.muted, theme.surface, iw);

    // Action row. Tab moves focus onto the confirm button, Enter then confirms.
    let action_y = balance_y + 1;
    let hint = "[Tab] focus  ";
    let confirm = "[c] Select Validator";
    let close = "  [Esc] Close";
    let total = display_width(hint) + display_width(confirm) + display_width(close);
    let mut ax = x + iw.saturating_sub(total as u16);
    put(buffer, ax, action_y, hint, theme.muted, theme.surface, iw);
    ax += display_width(hint) as u16;
    let (confirm_fg, confirm_bg) = if dialog.focus() == Focus::ConfirmAction {
        (theme.background, theme.cursor)
    } else {
        (theme.accent, theme.surface)
    };
    buffer.put_str(ax, action_y, confirm, confirm_fg, confirm_bg, true, false, iw);
    ax += display_width(confirm) as u16;
    buffer.put_str(ax, action_y, close, theme.accent, theme.surface, true, false, iw);
}

fn draw_header(table: &TableState, theme: &Theme, buffer: &mut Buffer, x: u16, y: u16) {
    let columns = [
        (SortKey::Name, 0, "[n]"),
        (SortKey::Apr, NAME_COL, "[a]"),
        (SortKey::Delegated, NAME_COL + APR_COL, "[d]"),
    ];
    for (key, offset, hint) in columns {
        let active = table.sort_key() == key;
        let indicator = if active {
            match table.direction() {
                SortDirection::Ascending => " ▲",
                SortDirection::Descending => " ▼",
            }
        } else {
            ""
        };
        let label = format!("{} {}{}", key.label(), hint, indicator);
        let fg = if active { theme.accent } else { theme.muted };
        buffer.put_str(x + offset, y, &label, fg, theme.surface, true, false, NAME_COL);
    }
}

fn draw_rows(dialog: &SelectDialog, theme: &Theme, buffer: &mut Buffer, x: u16, y: u16) {
    let table = dialog.table();
    let rows = table.visible_page();

    for (i, row) in rows.iter().enumerate() {
        let row_y = y + i as u16;
        let focused = i == dialog.cursor();
        let selected = table.is_selected(row.id);

        let bg = if focused {
            theme.cursor
        } else if selected {
            theme.selection
        } else {
            theme.surface
        };
        let inverted = focused || selected;
        buffer.fill_rect(x, row_y, TABLE_WIDTH, 1, theme.foreground, bg);

        // Name column: name plus dim voting power, right-aligned.
        let name_fg = if inverted { theme.background } else { theme.foreground };
        let name = truncate_to_width(&row.validator.name, NAME_COL as usize - 19);
        put(buffer, x, row_y, &name, name_fg, bg, NAME_COL);
        let power = format!("{} Voting Power", row.validator.voting_power);
        let power = pad_left(&power, 17);
        let power_x = x + NAME_COL - 1 - display_width(&power) as u16;
        let power_fg = if inverted { theme.background } else { theme.muted };
        buffer.put_str(power_x, row_y, &power, power_fg, bg, false, !inverted, NAME_COL);

        // APR column.
        let apr_fg = if inverted { theme.background } else { theme.apr };
        put(buffer, x + NAME_COL, row_y, &percent(row.validator.apr), apr_fg, bg, APR_COL);

        // Delegated column: amount plus dim price.
        let delegated_fg = if inverted { theme.background } else { theme.delegated };
        let delegated = amount(row.validator.delegated);
        let dx = x + NAME_COL + APR_COL;
        buffer.put_str(dx, row_y, &delegated, delegated_fg, bg, true, false, DELEGATED_COL);
        let price_fg = if inverted { theme.background } else { theme.price };
        let price_x = dx + display_width(&delegated) as u16 + 2;
        buffer.put_str(
            price_x,
            row_y,
            &amount(row.validator.price),
            price_fg,
            bg,
            false,
            !inverted,
            DELEGATED_COL,
        );
    }

    // Filler keeps the table the same height on an underfilled trailing page.
    for i in 0..table.filler_rows() {
        let row_y = y + (rows.len() + i) as u16;
        buffer.fill_rect(x, row_y, TABLE_WIDTH, 1, theme.foreground, theme.surface);
    }
}

fn draw_footer(table: &TableState, theme: &Theme, buffer: &mut Buffer, x: u16, y: u16, iw: u16) {
    let visible = table.visible_page().len();
    let range = if visible == 0 {
        "0–0 of 0".to_string()
    } else {
        let start = table.page_index() * table.page_size() + 1;
        format!("{}–{} of {}", start, start + visible - 1, table.len())
    };
    let line = format!(
        "Rows per page: {} [s]    {}    ←/→ page",
        table.page_size(),
        range
    );
    put(buffer, x, y, &line, theme.muted, theme.surface, iw);
}

fn draw_notice(notice: &Notice, theme: &Theme, buffer: &mut Buffer) {
    let (w, h) = (buffer.width(), buffer.height());
    let message_width = display_width(&notice.message) as u16;
    let nw = (message_width + 6).max(30).min(w);
    let nh = 5u16.min(h);
    let x0 = (w.saturating_sub(nw)) / 2;
    let y0 = (h.saturating_sub(nh)) / 2;

    buffer.fill_rect(x0, y0, nw, nh, theme.foreground, theme.surface);
    draw_border(buffer, x0, y0, nw, nh, theme.warning, theme.surface);
    buffer.put_str(
        x0 + 3,
        y0 + 1,
        &notice.message,
        theme.foreground,
        theme.surface,
        true,
        false,
        nw.saturating_sub(6),
    );
    put(
        buffer,
        x0 + 3,
        y0 + 3,
        "Press any key to continue",
        theme.muted,
        theme.surface,
        nw.saturating_sub(6),
    );
}

fn draw_border(buffer: &mut Buffer, x: u16, y: u16, w: u16, h: u16, fg: Rgb, bg: Rgb) {
    if w < 2 || h < 2 {
        return;
    }
    let right = x + w - 1;
    let bottom = y + h - 1;
    for xx in x + 1..right {
        put(buffer, xx, y, "─", fg, bg, 1);
        put(buffer, xx, bottom, "─", fg, bg, 1);
    }
    for yy in y + 1..bottom {
        put(buffer, x, yy, "│", fg, bg, 1);
        put(buffer, right, yy, "│", fg, bg, 1);
    }
    put(buffer, x, y, "╭", fg, bg, 1);
    put(buffer, right, y, "╮", fg, bg, 1);
    put(buffer, x, bottom, "╰", fg, bg, 1);
    put(buffer, right, bottom, "╯", fg, bg, 1);
}

fn put(buffer: &mut Buffer, x: u16, y: u16, s: &str, fg: Rgb, bg: Rgb, max: u16) {
    buffer.put_str(x, y, s, fg, bg, false, false, max);
}

fn put_centered(buffer: &mut Buffer, w: u16, y: u16, s: &str, fg: Rgb, bg: Rgb, bold: bool) {
    let x = (w.saturating_sub(display_width(s) as u16)) / 2;
    buffer.put_str(x, y, s, fg, bg, bold, false, w);
}
