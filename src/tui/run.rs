//! TUI entry point and terminal setup.

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{prelude::CrosstermBackend, Terminal};

use crate::home::Home;
use crate::store::IdSource;
use crate::tui::app::App;

/// Initialise the terminal and run the checklist screen until the user quits.
///
/// The terminal is restored even when the event loop fails.
pub fn run_tui<I: IdSource>(home: Home<I>) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(home);
    info!(
        "event=ui_start module=tui status=ok count={}",
        app.home().tasks().len()
    );
    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(
        "event=ui_stop module=tui status={} count={}",
        if result.is_ok() { "ok" } else { "error" },
        app.home().tasks().len()
    );
    result
}
