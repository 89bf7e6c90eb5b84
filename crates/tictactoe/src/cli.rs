//! Command-line interface for tictactoe.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::theme::Theme;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play(PlayArgs),

    /// Apply cell indices (0-8) headless and print the result
    Replay {
        /// Cell indices in the order they are clicked
        #[arg(required = true)]
        moves: Vec<usize>,

        /// Print the final snapshot as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Self::Play(PlayArgs::default())
    }
}

/// Options for the terminal UI.
#[derive(Args, Debug, Default, Clone)]
pub struct PlayArgs {
    /// Theme at startup (overrides the settings file)
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,

    /// Settings file [default: tictactoe.toml if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log file (overrides the settings file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Hide the key help line
    #[arg(long)]
    pub no_help: bool,
}
