//! tictactoe - terminal tic-tac-toe.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe::replay::{render_text, replay};
use tictactoe::{Cli, Command, PlayArgs, Settings, logging, run};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Play(args) => run_play(args),
        Command::Replay { moves, json } => run_replay(&moves, json),
    }
}

/// Run the terminal UI.
fn run_play(args: PlayArgs) -> Result<()> {
    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(theme) = args.theme {
        settings = settings.with_theme(theme);
    }
    if let Some(log_file) = args.log_file {
        settings = settings.with_log_file(log_file);
    }
    if args.no_help {
        settings = settings.with_show_help(false);
    }

    logging::init_file(settings.log_file())?;
    info!(?settings, "Settings resolved");

    run::run(&settings)
}

/// Replay moves headless and print the outcome.
fn run_replay(moves: &[usize], json: bool) -> Result<()> {
    logging::init_stderr();

    let snapshot = replay(moves).context("Replay failed")?;
    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("{}", render_text(&snapshot));
    }
    Ok(())
}
