//! Tic-tac-toe game engine.
//!
//! Pure state and transition logic for a local two-player game: a 3x3
//! board, alternating turns starting with X, and win/draw detection. No
//! rendering and no I/O live here.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, GameStatus, Mark};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 4, 1, 5] {
//!     engine.place_mark(index)?;
//! }
//! let snapshot = engine.place_mark(2)?;
//! assert_eq!(snapshot.status(), GameStatus::Won(Mark::X));
//! assert_eq!(snapshot.winner(), Some(Mark::X));
//! # Ok::<(), tictactoe_engine::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod engine;
mod error;
pub mod invariants;
mod position;
pub mod rules;
mod snapshot;
mod types;

pub use contracts::{Contract, PlaceMarkContract};
pub use engine::GameEngine;
pub use error::EngineError;
pub use position::Position;
pub use snapshot::Snapshot;
pub use types::{Board, GameStatus, Mark, Square};
