//! Transition invariant: every step places exactly one mark.

use super::Invariant;
use crate::{Board, Cell, GameHistory, Mark};

/// Invariant: each snapshot differs from the previous one in exactly one
/// cell, which went from empty to the mark of the player whose turn it was.
pub struct SingleMarkInvariant;

impl SingleMarkInvariant {
    fn is_valid_transition(step: usize, before: &Board, after: &Board) -> bool {
        let mut changed = before
            .cells()
            .iter()
            .zip(after.cells())
            .filter(|(old, new)| old != new);

        match (changed.next(), changed.next()) {
            (Some((Cell::Empty, Cell::Marked(mark))), None) => *mark == Mark::for_step(step),
            _ => false,
        }
    }
}

impl Invariant<GameHistory> for SingleMarkInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.snapshots
            .windows(2)
            .enumerate()
            .all(|(step, pair)| Self::is_valid_transition(step, &pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Each move places exactly one mark, alternating X and O"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_replayed_game_holds() {
        let game = GameHistory::replay(&[4, 0, 8, 2, 1, 7]).expect("valid indices");
        assert!(SingleMarkInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut game = GameHistory::replay(&[4]).expect("valid indices");
        let overwritten = game.snapshots[1].with_mark(Position::Center, Mark::O);
        game.snapshots.push(overwritten);
        assert!(!SingleMarkInvariant::holds(&game));
    }

    #[test]
    fn test_two_marks_in_one_step_violates() {
        let mut game = GameHistory::new();
        let doubled = Board::empty()
            .with_mark(Position::TopLeft, Mark::X)
            .with_mark(Position::Center, Mark::O);
        game.snapshots.push(doubled);
        assert!(!SingleMarkInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_mark_violates() {
        let mut game = GameHistory::new();
        game.snapshots
            .push(Board::empty().with_mark(Position::TopLeft, Mark::O));
        assert!(!SingleMarkInvariant::holds(&game));
    }

    #[test]
    fn test_unchanged_snapshot_violates() {
        let mut game = GameHistory::new();
        game.snapshots.push(Board::empty());
        assert!(!SingleMarkInvariant::holds(&game));
    }
}
