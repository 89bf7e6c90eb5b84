//! Turn invariant: the mark to move agrees with the board.

use super::Invariant;
use crate::snapshot::Snapshot;
use crate::types::Mark;

/// Invariant: the turn is X exactly when both marks have been played
/// equally often.
///
/// The turn flips on every accepted move, including the one that ends
/// the game, so this holds in terminal states too.
pub struct TurnConsistent;

impl Invariant<Snapshot> for TurnConsistent {
    fn holds(snapshot: &Snapshot) -> bool {
        let board = snapshot.board();
        let expected = if board.count(Mark::X) == board.count(Mark::O) {
            Mark::X
        } else {
            Mark::O
        };
        snapshot.turn() == expected
    }

    fn description() -> &'static str {
        "Turn is X exactly when X and O counts are equal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, GameEngine};

    #[test]
    fn test_engine_snapshots_hold() {
        let mut engine = GameEngine::new();
        assert!(TurnConsistent::holds(&engine.snapshot()));
        for index in [0, 4, 1, 5, 2] {
            let snapshot = engine.place_mark(index).unwrap();
            assert!(TurnConsistent::holds(&snapshot));
        }
    }

    #[test]
    fn test_wrong_turn_violates() {
        let snapshot = Snapshot::capture(Board::new(), Mark::O);
        assert!(!TurnConsistent::holds(&snapshot));
    }
}
