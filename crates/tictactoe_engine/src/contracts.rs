//! Contract-based validation for the place-mark transition.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}.

use crate::error::EngineError;
use crate::invariants::{InvariantSet, TicTacToeInvariants};
use crate::position::Position;
use crate::snapshot::Snapshot;
use crate::types::Square;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for a transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), EngineError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, action: &A, after: &S) -> Result<(), EngineError>;
}

/// Contract for placing a mark by raw cell index.
///
/// Precondition: the index names a cell (0-8).
///
/// Postconditions for an accepted move:
/// - exactly one square changed, from Empty to the mover's mark
/// - the turn passed to the opponent
/// - every [`TicTacToeInvariants`] member holds
///
/// A rejected move (occupied cell, finished game) must leave the snapshot
/// untouched.
pub struct PlaceMarkContract;

impl PlaceMarkContract {
    /// Resolves an index to a position, rejecting anything outside the board.
    #[instrument]
    pub fn position(index: usize) -> Result<Position, EngineError> {
        Position::from_index(index).ok_or_else(|| {
            warn!(index, "Rejected out-of-range cell index");
            EngineError::InvalidArgument { index }
        })
    }
}

impl Contract<Snapshot, usize> for PlaceMarkContract {
    fn pre(_state: &Snapshot, index: &usize) -> Result<(), EngineError> {
        Self::position(*index).map(|_| ())
    }

    fn post(before: &Snapshot, index: &usize, after: &Snapshot) -> Result<(), EngineError> {
        let pos = Self::position(*index)?;
        let accepted = !before.is_terminal() && before.board().is_empty(pos);

        if !accepted {
            return if before == after {
                Ok(())
            } else {
                Err(violation("rejected move changed the game state"))
            };
        }

        let changed: Vec<usize> = (0..9)
            .filter(|&i| before.board().squares()[i] != after.board().squares()[i])
            .collect();
        if changed != [pos.to_index()] {
            return Err(violation("accepted move must change exactly the chosen square"));
        }
        if after.board().get(pos) != Square::Occupied(before.turn()) {
            return Err(violation("chosen square must hold the mover's mark"));
        }
        if after.turn() != before.turn().opponent() {
            return Err(violation("turn must pass to the opponent"));
        }

        TicTacToeInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            violation(&descriptions)
        })
    }
}

fn violation(description: &str) -> EngineError {
    warn!(description, "Postcondition failed");
    EngineError::InvariantViolation(format!("Postcondition failed: {}", description))
}
