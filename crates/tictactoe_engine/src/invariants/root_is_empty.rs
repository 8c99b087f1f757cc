//! Root invariant: the history starts from the empty board.

use super::Invariant;
use crate::{Board, GameHistory};

/// Invariant: at least one snapshot exists and the first is empty.
pub struct RootIsEmptyInvariant;

impl Invariant<GameHistory> for RootIsEmptyInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.snapshots.first() == Some(&Board::EMPTY)
    }

    fn description() -> &'static str {
        "History starts from the empty board"
    }
}
