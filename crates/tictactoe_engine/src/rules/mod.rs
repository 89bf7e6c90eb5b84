//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Status is never stored
//! anywhere; it is recomputed from the board by [`evaluate`] whenever it is
//! needed.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, winning_line};

use crate::types::{Board, GameStatus};
use tracing::instrument;

/// Derives the game status from a board.
///
/// A completed line wins; otherwise a full board is a draw; otherwise the
/// game is still in progress.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position, Square};

    fn board_of(marks: [Option<Mark>; 9]) -> Board {
        Board::from_squares(marks.map(|m| m.map_or(Square::Empty, Square::Occupied)))
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_top_row_wins() {
        use Mark::X;
        let board = board_of([Some(X), Some(X), Some(X), None, None, None, None, None, None]);
        assert_eq!(evaluate(&board), GameStatus::Won(X));
    }

    #[test]
    fn test_diagonal_wins() {
        use Mark::X;
        let board = board_of([Some(X), None, None, None, Some(X), None, None, None, Some(X)]);
        assert_eq!(evaluate(&board), GameStatus::Won(X));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        use Mark::{O, X};
        // X O X / X O O / O X X
        let board = board_of([
            Some(X),
            Some(O),
            Some(X),
            Some(X),
            Some(O),
            Some(O),
            Some(O),
            Some(X),
            Some(X),
        ]);
        assert_eq!(evaluate(&board), GameStatus::Draw);
    }

    #[test]
    fn test_win_on_full_board_is_not_draw() {
        use Mark::{O, X};
        // X X X / O O X / X O O
        let board = board_of([
            Some(X),
            Some(X),
            Some(X),
            Some(O),
            Some(O),
            Some(X),
            Some(X),
            Some(O),
            Some(O),
        ]);
        assert_eq!(evaluate(&board), GameStatus::Won(X));
        assert_eq!(
            winning_line(&board),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }
}
