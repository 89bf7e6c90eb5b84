//! Terminal lifecycle and the event loop.
//!
//! This is the only module with side effects. Each event runs to completion
//! before the next one is read: draw, block on input, update, repeat.

use anyhow::{Context, Result};
use crossterm::ExecutableCommand;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::Rect;
use std::io;
use tracing::{debug, info, instrument, warn};

use crate::app::{Action, App};
use crate::config::Settings;
use crate::input::map_key;
use crate::ui;

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(DisableMouseCapture)?;
    stdout.execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

/// Translates a terminal event into an action, if it maps to one.
pub fn translate(event: &Event, screen: Rect, show_help: bool) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(*key),
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            ui::hit_test(screen, show_help, mouse.column, mouse.row)
        }
        _ => None,
    }
}

/// Runs the TUI until the user quits.
#[instrument(skip(settings))]
pub fn run(settings: &Settings) -> Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal().context("Failed to set up terminal")?;

    info!("Starting tic-tac-toe TUI");
    let result = event_loop(&mut terminal, App::new(settings));

    let restored = restore_terminal().context("Failed to restore terminal");
    let cursor = terminal.show_cursor().context("Failed to show cursor");
    finish(result, restored.and(cursor))
}

/// Combines the loop outcome with terminal cleanup. A loop error wins over a
/// cleanup error.
fn finish(result: Result<()>, cleanup: Result<()>) -> Result<()> {
    if let Err(err) = &cleanup {
        warn!(error = %err, "Terminal cleanup failed");
    }
    result.and(cleanup)
}

fn event_loop<B>(terminal: &mut Terminal<B>, mut app: App) -> Result<()>
where
    B: Backend,
    B::Error: std::error::Error + Send + Sync + 'static,
{
    loop {
        terminal.draw(|frame| ui::render(&app, frame))?;

        if *app.should_quit() {
            return Ok(());
        }

        let event = event::read().context("Failed to read terminal event")?;
        let size = terminal.size()?;
        let screen = Rect::new(0, 0, size.width, size.height);

        if let Some(action) = translate(&event, screen, *app.show_help()) {
            debug!(?action, "Dispatching action");
            app.update(action);
        }
    }
}
