//! The tic-tac-toe game engine.

use crate::contracts::{Contract, PlaceMarkContract};
use crate::error::EngineError;
use crate::position::Position;
use crate::snapshot::Snapshot;
use crate::types::{Board, GameStatus, Mark, Square};
use tracing::{debug, info, instrument};

/// Owns the board and turn of a single local game.
///
/// Status is derived from the board on demand; it is never stored, so it
/// cannot drift out of sync with the cells. Every mutation goes through
/// [`place_mark`](Self::place_mark), [`place`](Self::place) or
/// [`restart`](Self::restart).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameEngine {
    board: Board,
    turn: Mark,
}

impl GameEngine {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moves next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the current status, derived from the board.
    pub fn status(&self) -> GameStatus {
        crate::rules::evaluate(&self.board)
    }

    /// Captures the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self.board, self.turn)
    }

    /// Places the current mark on cell `index` (0-8).
    ///
    /// Clicking an occupied cell or playing after the game is over is a
    /// no-op and returns the unchanged snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidArgument`] if `index` is outside 0-8.
    /// In debug builds a failed postcondition returns
    /// [`EngineError::InvariantViolation`]. Either way the state is left as
    /// it was before the call.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn place_mark(&mut self, index: usize) -> Result<Snapshot, EngineError> {
        let before = self.snapshot();
        PlaceMarkContract::pre(&before, &index)?;
        let pos = PlaceMarkContract::position(index)?;

        let after = self.place(pos);

        #[cfg(debug_assertions)]
        self.verify(&before, index, &after)?;

        Ok(after)
    }

    /// Checks the postcondition of a move, rolling back to `before` on failure.
    #[cfg(debug_assertions)]
    fn verify(
        &mut self,
        before: &Snapshot,
        index: usize,
        after: &Snapshot,
    ) -> Result<(), EngineError> {
        PlaceMarkContract::post(before, &index, after).inspect_err(|err| {
            tracing::warn!(%err, "Rolling back move");
            self.board = *before.board();
            self.turn = before.turn();
        })
    }

    /// Places the current mark on `pos`.
    ///
    /// Same transition as [`place_mark`](Self::place_mark) for a position
    /// that is valid by construction.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn place(&mut self, pos: Position) -> Snapshot {
        let status = self.status();
        if status.is_terminal() {
            debug!(?status, "Game is over, ignoring move");
            return self.snapshot();
        }
        if !self.board.is_empty(pos) {
            debug!(position = %pos, "Square is occupied, ignoring move");
            return self.snapshot();
        }

        self.board.set(pos, Square::Occupied(self.turn));
        self.turn = self.turn.opponent();

        let snapshot = self.snapshot();
        match snapshot.status() {
            GameStatus::InProgress => {
                debug!(position = %pos, next = %snapshot.turn(), "Mark placed");
            }
            GameStatus::Won(winner) => info!(position = %pos, %winner, "Game won"),
            GameStatus::Draw => info!(position = %pos, "Game drawn"),
        }
        snapshot
    }

    /// Resets to a fresh game. Always succeeds.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Snapshot {
        info!(previous = ?self.status(), "Restarting game");
        *self = Self::new();
        self.snapshot()
    }
}
