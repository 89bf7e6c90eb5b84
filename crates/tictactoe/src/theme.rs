//! Light and dark themes.
//!
//! The theme is purely cosmetic: it never touches the game engine. Each
//! theme maps to a [`Palette`] of ratatui styles consumed by the renderer.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which colour scheme the UI is drawn with.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light background, dark text.
    #[default]
    #[display("light")]
    Light,
    /// Dark background, light text.
    #[display("dark")]
    Dark,
}

impl Theme {
    /// Returns the other theme.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Label of the toggle control, naming the theme it switches to.
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "🌙 Dark",
            Self::Dark => "☀️ Light",
        }
    }

    /// Screen-reader hint for the toggle control.
    pub fn toggle_hint(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }

    /// Returns the styles for this theme.
    pub fn palette(self) -> Palette {
        match self {
            Self::Light => LIGHT,
            Self::Dark => DARK,
        }
    }
}

/// Styles used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Whole-screen base (background and default text).
    pub base: Style,
    /// Title bar.
    pub title: Style,
    /// Status line.
    pub status: Style,
    /// X marks, and the winner's name when X wins.
    pub primary: Style,
    /// O marks, and the winner's name when O wins.
    pub accent: Style,
    /// Key hints in empty cells.
    pub empty: Style,
    /// Cell borders.
    pub grid: Style,
    /// Empty cell under the cursor.
    pub cursor: Style,
    /// Occupied cells, which cannot be played.
    pub disabled: Style,
    /// Occupied cell under the cursor.
    pub blocked: Style,
    /// Cell borders once the game is over.
    pub ended: Style,
    /// Cells of the winning line.
    pub winning: Style,
    /// Buttons.
    pub control: Style,
    /// Footer and key help.
    pub help: Style,
}

const LIGHT: Palette = Palette {
    base: Style::new().fg(Color::Black).bg(Color::White),
    title: Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD),
    status: Style::new().fg(Color::Black).add_modifier(Modifier::BOLD),
    primary: Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD),
    accent: Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
    empty: Style::new().fg(Color::Gray),
    grid: Style::new().fg(Color::DarkGray),
    cursor: Style::new().bg(Color::LightYellow),
    disabled: Style::new().bg(Color::Gray),
    blocked: Style::new().bg(Color::LightRed),
    ended: Style::new().fg(Color::Gray).add_modifier(Modifier::DIM),
    winning: Style::new().bg(Color::LightGreen).add_modifier(Modifier::BOLD),
    control: Style::new().fg(Color::White).bg(Color::Blue),
    help: Style::new().fg(Color::DarkGray),
};

const DARK: Palette = Palette {
    base: Style::new().fg(Color::White).bg(Color::Black),
    title: Style::new().fg(Color::LightCyan).add_modifier(Modifier::BOLD),
    status: Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
    primary: Style::new().fg(Color::LightBlue).add_modifier(Modifier::BOLD),
    accent: Style::new().fg(Color::LightRed).add_modifier(Modifier::BOLD),
    empty: Style::new().fg(Color::DarkGray),
    grid: Style::new().fg(Color::Gray),
    cursor: Style::new().bg(Color::DarkGray),
    disabled: Style::new().bg(Color::Indexed(236)),
    blocked: Style::new().bg(Color::Red),
    ended: Style::new().fg(Color::DarkGray).add_modifier(Modifier::DIM),
    winning: Style::new().bg(Color::Green).add_modifier(Modifier::BOLD),
    control: Style::new().fg(Color::Black).bg(Color::LightCyan),
    help: Style::new().fg(Color::Gray),
};
