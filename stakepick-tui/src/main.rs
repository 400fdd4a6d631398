use std::fs::File;

use crossterm::event::Event as CtEvent;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

use stakepick_tui::{draw, App, AppResult, Flow, Key, Terminal, Theme};

fn main() -> AppResult<()> {
    let log_file = File::create("stakepick.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let theme = Theme::dark();
    let mut terminal = Terminal::new()?;
    let mut app = App::new();

    loop {
        terminal.render(|buffer| draw::draw(&app, &theme, buffer))?;

        for event in terminal.poll(None)? {
            if let CtEvent::Key(key_event) = event {
                if let Some((key, modifiers)) = Key::from_crossterm(&key_event) {
                    if app.handle_key(key, modifiers) == Flow::Quit {
                        return Ok(());
                    }
                }
            }
            // Resizes are picked up by the next render pass.
        }
    }
}
