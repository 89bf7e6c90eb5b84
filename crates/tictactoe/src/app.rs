//! Application state and update logic.
//!
//! [`App`] is the UI session: it owns the engine, the latest snapshot, the
//! theme and the cursor. Rendering reads it; [`App::update`] is the only
//! way it changes.

use derive_getters::Getters;
use tictactoe_engine::{GameEngine, Position, Snapshot};
use tracing::{debug, info, instrument};

use crate::config::Settings;
use crate::input::move_cursor;
use crate::theme::Theme;

/// Cursor direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// A user intent, translated from a key press or mouse click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor.
    MoveCursor(Direction),
    /// Play the cell under the cursor.
    PlaceAtCursor,
    /// Play a specific cell (digit key or click).
    Place(Position),
    /// Start a new game.
    Restart,
    /// Switch between light and dark.
    ToggleTheme,
    /// Show or hide the key help line.
    ToggleHelp,
    /// Leave the application.
    Quit,
}

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    #[getter(skip)]
    engine: GameEngine,
    snapshot: Snapshot,
    theme: Theme,
    cursor: Position,
    show_help: bool,
    should_quit: bool,
}

impl App {
    /// Creates an application with a fresh game.
    #[instrument(skip(settings))]
    pub fn new(settings: &Settings) -> Self {
        let engine = GameEngine::new();
        Self {
            snapshot: engine.snapshot(),
            engine,
            theme: *settings.theme(),
            cursor: Position::Center,
            show_help: *settings.show_help(),
            should_quit: false,
        }
    }

    /// Applies an action.
    #[instrument(skip(self))]
    pub fn update(&mut self, action: Action) {
        match action {
            Action::MoveCursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Action::PlaceAtCursor => self.place(self.cursor),
            Action::Place(pos) => {
                self.cursor = pos;
                self.place(pos);
            }
            Action::Restart => {
                self.snapshot = self.engine.restart();
                self.cursor = Position::Center;
            }
            Action::ToggleTheme => {
                self.theme = self.theme.toggle();
                info!(theme = %self.theme, "Theme changed");
            }
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    /// Returns true when `pos` can be played right now.
    pub fn is_playable(&self, pos: Position) -> bool {
        !self.snapshot.is_terminal() && self.snapshot.board().is_empty(pos)
    }

    /// Forwards a move to the engine unless the cell is already known to be
    /// unplayable.
    fn place(&mut self, pos: Position) {
        if !self.is_playable(pos) {
            debug!(position = %pos, "Cell not playable, ignoring");
            return;
        }
        self.snapshot = self.engine.place(pos);
    }
}
