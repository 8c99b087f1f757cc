//! Draw detection logic for tic-tac-toe.

use super::win::winner;
use crate::Board;

/// Checks if the game on `board` ended in a draw.
///
/// A draw is a full board with no winning line. It is distinct from an
/// unfinished board with no winner.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winner(board).is_none()
}
