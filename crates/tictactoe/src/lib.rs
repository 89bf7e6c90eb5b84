//! Terminal tic-tac-toe for two players sharing one keyboard.
//!
//! # Architecture
//!
//! - **Engine**: game state and rules live in [`tictactoe_engine`]
//! - **App**: UI session state, updated by [`Action`]s
//! - **Input**: key and mouse mapping to actions
//! - **UI**: stateless ratatui rendering and hit-testing
//! - **Theme**: cosmetic light/dark palette, independent of the game
//! - **Config / CLI / Logging**: settings file, flags, tracing setup

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod presenter;
pub mod replay;
pub mod run;
pub mod theme;
pub mod ui;

pub use app::{Action, App, Direction};
pub use cli::{Cli, Command, PlayArgs};
pub use config::{ConfigError, Settings};
pub use theme::{Palette, Theme};
