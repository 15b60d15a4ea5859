//! Terminal UI for tic-tac-toe.
//!
//! A synchronous event loop: draw, block on the next terminal event, turn
//! it into an [`Input`], let the [`App`] run the reducer, repeat.

mod app;
mod input;
mod ui;
mod widgets;

pub use app::{App, Focus, HitMap};
pub use input::{Arrow, Input, map_event, map_key, move_cursor};
pub use ui::draw;
pub use widgets::{BoardWidget, CELL_HEIGHT, CELL_WIDTH, CellWidget};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument};

use crate::Settings;

/// Runs the terminal UI until the user quits.
///
/// Takes over the terminal (raw mode, alternate screen, mouse capture) and
/// restores it on exit, including when the loop fails.
#[instrument(skip_all)]
pub fn run(settings: &Settings) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(settings.title().clone());
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!(
        moves = app.game().history().len() - 1,
        status = %app.game().status(),
        "Terminal UI closed"
    );
    res
}

/// Draw/read/handle loop over any backend.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| draw(f, app))?;

        if app.should_quit() {
            return Ok(());
        }

        let event = event::read().context("Failed to read terminal event")?;
        if let Some(input) = map_event(&event) {
            app.handle_input(input);
        }
    }
}
