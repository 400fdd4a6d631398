//! Application shell: home screen, dialog lifecycle, blocking notices.

use log::{debug, info};

use stakepick_lib::{sample_validators, SortKey, StaticSource};

use crate::dialog::{Confirm, Focus, SelectDialog};
use crate::event::{Key, Modifiers};

/// Demo wallet figures shown in the dialog footer.
pub const NOM_BALANCE: &str = "23.20931";
pub const NOM_BALANCE_USD: &str = "16,208.04 $";

/// A blocking notification. Dismissed by any key.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    /// Whether dismissing the notice also closes the dialog (the happy path
    /// after a confirmed selection).
    close_dialog: bool,
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    source: StaticSource,
    dialog: Option<SelectDialog>,
    notice: Option<Notice>,
}

impl App {
    pub fn new() -> Self {
        Self {
            source: StaticSource::new(sample_validators()),
            dialog: None,
            notice: None,
        }
    }

    pub fn dialog(&self) -> Option<&SelectDialog> {
        self.dialog.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> Flow {
        if self.notice.is_some() {
            self.dismiss_notice();
            return Flow::Continue;
        }
        if self.dialog.is_some() {
            self.handle_dialog_key(key, modifiers);
            return Flow::Continue;
        }
        self.handle_home_key(key, modifiers)
    }

    fn handle_home_key(&mut self, key: Key, modifiers: Modifiers) -> Flow {
        match key {
            Key::Enter => {
                self.dialog = Some(SelectDialog::open(&self.source));
                Flow::Continue
            }
            Key::Char('q') if modifiers.none() => {
                info!("quit requested");
                Flow::Quit
            }
            Key::Escape => {
                info!("quit requested");
                Flow::Quit
            }
            _ => Flow::Continue,
        }
    }

    fn handle_dialog_key(&mut self, key: Key, modifiers: Modifiers) {
        let Some(dialog) = self.dialog.as_mut() else {
            return;
        };
        // Char shortcuts only fire on unmodified presses.
        match key {
            Key::Escape => {
                debug!("select dialog cancelled");
                self.dialog = None;
            }
            Key::Up => dialog.cursor_up(),
            Key::Down => dialog.cursor_down(),
            Key::Left | Key::PageUp => dialog.previous_page(),
            Key::Right | Key::PageDown => dialog.next_page(),
            Key::Tab => dialog.cycle_focus(),
            Key::Enter => match dialog.focus() {
                Focus::Table => {
                    dialog.activate_cursor();
                }
                Focus::ConfirmAction => self.confirm(),
            },
            Key::Char('n') | Key::Char('1') if modifiers.none() => {
                dialog.request_sort(SortKey::Name)
            }
            Key::Char('a') | Key::Char('2') if modifiers.none() => {
                dialog.request_sort(SortKey::Apr)
            }
            Key::Char('d') | Key::Char('3') if modifiers.none() => {
                dialog.request_sort(SortKey::Delegated)
            }
            Key::Char('s') if modifiers.none() => dialog.cycle_page_size(),
            Key::Char('c') if modifiers.none() => self.confirm(),
            _ => {}
        }
    }

    fn confirm(&mut self) {
        let Some(dialog) = self.dialog.as_ref() else {
            return;
        };
        match dialog.confirm() {
            Confirm::NoSelection => {
                debug!("confirm without selection");
                self.notice = Some(Notice {
                    message: "Please select a validator.".into(),
                    close_dialog: false,
                });
            }
            Confirm::Selected(validator) => {
                info!("validator confirmed: {}", validator.name);
                self.notice = Some(Notice {
                    message: format!(
                        "You have selected the validator '{}'",
                        validator.name
                    ),
                    close_dialog: true,
                });
            }
        }
    }

    fn dismiss_notice(&mut self) {
        if let Some(notice) = self.notice.take() {
            if notice.close_dialog {
                self.dialog = None;
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
