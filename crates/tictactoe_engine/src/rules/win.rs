//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Position};
use tracing::instrument;

/// The eight winning triples, in evaluation order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line in [`LINES`] held entirely by one mark.
#[instrument(level = "trace")]
pub fn winning_line(board: &Board) -> Option<([Position; 3], Mark)> {
    LINES.into_iter().find_map(|line @ [a, b, c]| {
        let mark = board.cell(a).mark()?;
        (board.cell(b).mark() == Some(mark) && board.cell(c).mark() == Some(mark))
            .then_some((line, mark))
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if that mark has three in a row, `None` otherwise.
/// If several lines are complete (only possible on unreachable boards) the
/// first one in [`LINES`] decides.
pub fn winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(_, mark)| mark)
}
