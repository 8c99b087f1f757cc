//! Terminal invariant: nothing is recorded after a winning snapshot.

use super::Invariant;
use crate::{GameHistory, rules};

/// Invariant: only the last snapshot may hold a winning line.
pub struct NoMoveAfterWinInvariant;

impl Invariant<GameHistory> for NoMoveAfterWinInvariant {
    fn holds(game: &GameHistory) -> bool {
        match game.snapshots.split_last() {
            Some((_, earlier)) => earlier.iter().all(|board| rules::winner(board).is_none()),
            None => true,
        }
    }

    fn description() -> &'static str {
        "No move follows a won board"
    }
}
