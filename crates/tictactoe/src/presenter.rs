//! Text policy for the status line and controls.

use tictactoe_engine::{GameStatus, Snapshot};

/// Window title.
pub const TITLE: &str = "Tic Tac Toe";

/// Status line for a snapshot: whose turn it is, who won, or a draw.
pub fn status_line(snapshot: &Snapshot) -> String {
    match snapshot.status() {
        GameStatus::InProgress => format!("Turn: {}", snapshot.turn()),
        GameStatus::Won(winner) => format!("{} wins!", winner),
        GameStatus::Draw => "It's a draw!".to_string(),
    }
}

/// Label of the restart control.
pub fn restart_label(status: GameStatus) -> &'static str {
    if status.is_terminal() {
        "Start New Game"
    } else {
        "Restart"
    }
}
