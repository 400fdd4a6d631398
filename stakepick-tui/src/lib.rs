pub mod app;
pub mod dialog;
pub mod draw;
pub mod error;
pub mod event;
pub mod terminal;
pub mod theme;
pub mod ui;

pub use app::{App, Flow};
pub use dialog::{Confirm, Focus, SelectDialog};
pub use error::{AppError, AppResult};
pub use event::{Key, Modifiers};
pub use terminal::Terminal;
pub use theme::Theme;
