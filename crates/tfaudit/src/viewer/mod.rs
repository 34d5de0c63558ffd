//! Full-screen terminal table for audit events.
//!
//! Uses ratatui over crossterm. The event list is borrowed for the lifetime
//! of the viewer and never modified.

pub mod app;
pub mod ui;

pub use app::Viewer;

use std::io;

use crossterm::{
    ExecutableCommand,
    event::{self, Event},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use tracing::debug;

use crate::model::AuditEvent;

/// Shows `events` in a scrollable table and blocks until the user exits.
///
/// `events` must not be empty; callers report the empty case themselves.
/// The terminal is restored whether the event loop ends normally or with an
/// error.
pub fn display(events: &[AuditEvent]) -> io::Result<()> {
    debug_assert!(!events.is_empty(), "viewer invoked with no events");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = stdout.execute(EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e);
    }

    let result = Terminal::new(CrosstermBackend::new(stdout)).and_then(|mut terminal| {
        let mut viewer = Viewer::new(events);
        debug!(rows = events.len(), "starting viewer");

        let result = run_loop(&mut terminal, &mut viewer);
        first_error(result, terminal.show_cursor())
    });

    // Restore terminal
    let restored = first_error(
        disable_raw_mode(),
        io::stdout().execute(LeaveAlternateScreen).map(drop),
    );
    first_error(result, restored)
}

/// Keeps the first failure of two steps that both had to run.
fn first_error(first: io::Result<()>, second: io::Result<()>) -> io::Result<()> {
    first.and(second)
}

fn run_loop<B: Backend>(terminal: &mut Terminal<B>, viewer: &mut Viewer) -> io::Result<()> {
    while !viewer.should_exit() {
        terminal.draw(|f| ui::draw(f, viewer))?;

        // Resize and other events fall through to a redraw.
        if let Event::Key(key) = event::read()? {
            viewer.handle_key(key);
        }
    }

    Ok(())
}
