//! Terminal UI for the arena.
//!
//! Single-threaded and event-driven: each key press is applied to the
//! engine as one synchronous transition, then the screen is redrawn.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, CursorMove, action_for, move_cursor};
pub use ui::draw;

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io::{self, Write};
use tracing::{debug, error, info, instrument};

use crate::config::ArenaConfig;

/// Raw mode and alternate screen for the lifetime of the guard.
///
/// Dropping it restores the terminal, including while unwinding from a panic.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(err) = restore_terminal(&mut io::stdout()) {
            error!(error = ?err, "Failed to restore terminal");
        }
    }
}

/// Leaves raw mode and the alternate screen, showing the cursor again.
///
/// Every step is attempted; the first failure is reported.
fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(out, LeaveAlternateScreen, Show);
    raw.and(screen)
}

/// Runs the interactive game until the user quits.
///
/// The terminal is restored before any error or panic leaves this function.
#[instrument(skip(config))]
pub fn run_tui(config: &ArenaConfig) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(*config.history_limit());
    let res = run_app(&mut terminal, &mut app);

    drop(terminal);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }

    let scores = app.engine().scoreboard();
    info!(
        x = *scores.x(),
        o = *scores.o(),
        draws = *scores.draws(),
        "Session ended"
    );
    res
}

/// Draw, wait for one event, apply it; until quit.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    while !app.should_quit() {
        terminal.draw(|f| draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_leaves_alternate_screen_and_shows_cursor() {
        // Raw mode was never enabled here, so disabling it is a no-op.
        let mut out = Vec::new();
        restore_terminal(&mut out).expect("restore succeeds");

        let written = String::from_utf8(out).expect("ansi output");
        assert!(written.contains("\x1b[?1049l"));
        assert!(written.contains("\x1b[?25h"));
    }
}
