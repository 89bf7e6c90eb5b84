//! Immutable views of the game state.

use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameStatus, Mark};
use serde::{Deserialize, Serialize};

/// Point-in-time view of a game: `{board, turn, status, winner}`.
///
/// Status and winner are computed from the board when the snapshot is
/// captured, so they can never disagree with it. Deserialization reads only
/// the board and turn and recomputes the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "SnapshotRepr")]
pub struct Snapshot {
    board: Board,
    turn: Mark,
    status: GameStatus,
    winner: Option<Mark>,
}

/// Serialized fields a snapshot is rebuilt from.
#[derive(Deserialize)]
struct SnapshotRepr {
    board: Board,
    turn: Mark,
}

impl From<SnapshotRepr> for Snapshot {
    fn from(repr: SnapshotRepr) -> Self {
        Self::capture(repr.board, repr.turn)
    }
}

impl Snapshot {
    /// Captures a snapshot, deriving status and winner from `board`.
    pub fn capture(board: Board, turn: Mark) -> Self {
        let status = rules::evaluate(&board);
        Self {
            board,
            turn,
            status,
            winner: status.winner(),
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

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the winner, if the game was won.
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the line that won the game, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(&self.board)
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::capture(Board::new(), Mark::X)
    }
}
