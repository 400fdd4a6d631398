//! The "Select Validator node" dialog state.
//!
//! Owns a fresh [`TableState`] per open, plus the cursor the keyboard moves
//! through the visible page. Rendering lives in [`crate::draw`].

use log::debug;

use stakepick_lib::{SortKey, TableState, Validator, ValidatorRow, ValidatorSource, PAGE_SIZES};

/// Outcome of activating the confirm action.
#[derive(Debug, Clone, PartialEq)]
pub enum Confirm {
    /// Nothing selected yet; the host must warn and keep the dialog open.
    NoSelection,
    Selected(Validator),
}

/// Which part of the dialog Enter acts on. Tab cycles between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Table,
    ConfirmAction,
}

#[derive(Debug, Clone)]
pub struct SelectDialog {
    table: TableState,
    /// Cursor position within the visible page.
    cursor: usize,
    focus: Focus,
    /// Name of the last record emitted via row activation.
    last_emitted: Option<String>,
}

impl SelectDialog {
    /// Open the dialog with a fresh snapshot of `source`.
    ///
    /// Every open starts from default sort, page 0 and an empty selection, so
    /// nothing leaks across dialog sessions.
    pub fn open(source: &dyn ValidatorSource) -> Self {
        debug!("select dialog opened");
        Self {
            table: TableState::from_source(source),
            cursor: 0,
            focus: Focus::Table,
            last_emitted: None,
        }
    }

    pub fn table(&self) -> &TableState {
        &self.table
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn last_emitted(&self) -> Option<&str> {
        self.last_emitted.as_deref()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Move keyboard focus between the table and the confirm action.
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Table => Focus::ConfirmAction,
            Focus::ConfirmAction => Focus::Table,
        };
    }

    /// The row the cursor is on, if the page is non-empty.
    pub fn cursor_row(&self) -> Option<ValidatorRow> {
        self.table.visible_page().into_iter().nth(self.cursor)
    }

    pub fn cursor_up(&mut self) {
        self.focus = Focus::Table;
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        self.focus = Focus::Table;
        let rows = self.table.visible_page().len();
        if self.cursor + 1 < rows {
            self.cursor += 1;
        }
    }

    /// Activate the row under the cursor: record the selection and emit the
    /// chosen record to the caller.
    pub fn activate_cursor(&mut self) -> Option<Validator> {
        let row = self.cursor_row()?;
        let emitted = self.table.select_row(row.id).cloned()?;
        self.last_emitted = Some(emitted.name.clone());
        Some(emitted)
    }

    pub fn request_sort(&mut self, key: SortKey) {
        self.table.request_sort(key);
        self.clamp_cursor();
    }

    pub fn next_page(&mut self) {
        self.table.next_page();
        self.clamp_cursor();
    }

    pub fn previous_page(&mut self) {
        self.table.previous_page();
        self.clamp_cursor();
    }

    /// Cycle through the offered page sizes (5 → 10 → 25 → 5).
    pub fn cycle_page_size(&mut self) {
        let current = self.table.page_size();
        let position = PAGE_SIZES.iter().position(|&size| size == current);
        let next = match position {
            Some(i) => PAGE_SIZES[(i + 1) % PAGE_SIZES.len()],
            None => PAGE_SIZES[0],
        };
        self.table.set_page_size(next);
        self.cursor = 0;
        self.focus = Focus::Table;
    }

    /// The confirm action. Never mutates state: the host decides whether the
    /// dialog closes.
    pub fn confirm(&self) -> Confirm {
        match self.table.selected_validator() {
            Some(validator) => Confirm::Selected(validator.clone()),
            None => Confirm::NoSelection,
        }
    }

    // Table-side interactions also pull focus back to the table.
    fn clamp_cursor(&mut self) {
        self.focus = Focus::Table;
        let rows = self.table.visible_page().len();
        self.cursor = self.cursor.min(rows.saturating_sub(1));
    }
}
