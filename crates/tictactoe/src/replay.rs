//! Headless replay of a click sequence.

use tictactoe_engine::{EngineError, GameEngine, Snapshot};
use tracing::{info, instrument};

use crate::presenter::status_line;

/// Feeds `moves` to a fresh engine and returns the final snapshot.
///
/// Clicks on occupied cells and clicks after the game has ended are
/// ignored, exactly as in the UI.
///
/// # Errors
///
/// Stops at the first index outside 0-8.
#[instrument]
pub fn replay(moves: &[usize]) -> Result<Snapshot, EngineError> {
    let mut engine = GameEngine::new();
    let mut snapshot = engine.snapshot();
    for &index in moves {
        snapshot = engine.place_mark(index)?;
    }
    info!(status = ?snapshot.status(), "Replay finished");
    Ok(snapshot)
}

/// Board grid followed by the status line.
pub fn render_text(snapshot: &Snapshot) -> String {
    format!("{}\n\n{}", snapshot.board(), status_line(snapshot))
}
