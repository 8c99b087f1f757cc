//! Step invariant: the viewed step indexes a recorded snapshot.

use super::Invariant;
use crate::GameHistory;

/// Invariant: `0 <= step < snapshots.len()`.
pub struct StepInRangeInvariant;

impl Invariant<GameHistory> for StepInRangeInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.step < game.snapshots.len()
    }

    fn description() -> &'static str {
        "Viewed step is within the recorded history"
    }
}
