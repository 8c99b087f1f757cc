//! Move history with time travel.
//!
//! [`GameHistory`] is the sole owner of game state: an append-only arena of
//! board snapshots indexed by step, plus the step currently viewed. The
//! player to move, the winner and the draw state are all derived from the
//! viewed snapshot and are never stored.

use crate::invariants::{HistoryInvariants, InvariantSet};
use crate::view::{GameStatus, GameView, HistoryStep};
use crate::{Board, Mark, Position, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Caller error: an argument outside the valid range.
///
/// Rejected moves are not errors; see [`MoveOutcome::Rejected`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum HistoryError {
    /// Cell index outside 0-8.
    #[display("Cell index {index} is out of range (must be 0-8)")]
    CellOutOfRange {
        /// The offending index.
        index: usize,
    },
    /// Step outside the recorded history.
    #[display("Step {step} is out of range (history has {len} steps)")]
    StepOutOfRange {
        /// The requested step.
        step: usize,
        /// Number of recorded steps.
        len: usize,
    },
}

/// Why a legal-looking move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The viewed board already has a winner.
    #[display("Game is already won by {_0}")]
    GameOver(Mark),
    /// The selected cell already holds a mark.
    #[display("{_0} is already occupied")]
    CellOccupied(Position),
}

/// Result of selecting a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// A mark was placed and a new snapshot recorded.
    Placed {
        /// Step of the new snapshot.
        step: usize,
        /// The mark that was placed.
        mark: Mark,
        /// Where it was placed.
        position: Position,
    },
    /// Nothing changed.
    Rejected(Rejection),
}

impl MoveOutcome {
    /// Returns true if a snapshot was recorded.
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveOutcome::Placed { .. })
    }
}

/// Ordered board snapshots and the step being viewed.
///
/// Invariants:
/// - there is always at least one snapshot, the empty board
/// - consecutive snapshots differ by exactly one newly placed mark
/// - the viewed step is always a valid index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameHistory {
    pub(crate) snapshots: Vec<Board>,
    pub(crate) step: usize,
}

impl GameHistory {
    /// Creates a new game: one empty snapshot, viewed at step 0.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::empty()],
            step: 0,
        }
    }

    /// Builds a game by selecting each cell index in turn.
    ///
    /// Rejected moves are skipped as no-ops, the same as during play.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::CellOutOfRange`] at the first index outside 0-8.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Result<Self, HistoryError> {
        let mut game = Self::new();
        for &index in indices {
            game.select_cell(index)?;
        }
        Ok(game)
    }

    /// Attempts a move at cell `index` on the viewed snapshot.
    ///
    /// Guards run in order: the index must be in range, the viewed board
    /// must have no winner, and the cell must be empty. A refused move
    /// returns [`MoveOutcome::Rejected`] and leaves the history untouched.
    ///
    /// On success every snapshot after the viewed step is discarded before
    /// the new one is appended, and the new snapshot becomes the viewed step.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::CellOutOfRange`] if `index` is not in 0-8.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn select_cell(&mut self, index: usize) -> Result<MoveOutcome, HistoryError> {
        let Some(position) = Position::from_index(index) else {
            warn!(index, "Cell index out of range");
            return Err(HistoryError::CellOutOfRange { index });
        };
        Ok(self.select(position))
    }

    /// Attempts a move at `position` on the viewed snapshot.
    ///
    /// Same as [`select_cell`](Self::select_cell) without the range check.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn select(&mut self, position: Position) -> MoveOutcome {
        let current = *self.current_board();

        if let Some(winner) = rules::winner(&current) {
            debug!(%winner, "Move rejected, game is over");
            return MoveOutcome::Rejected(Rejection::GameOver(winner));
        }

        if !current.is_empty_at(position) {
            debug!(%position, "Move rejected, cell occupied");
            return MoveOutcome::Rejected(Rejection::CellOccupied(position));
        }

        let mark = self.to_move();
        let discarded = self.snapshots.len() - (self.step + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding snapshots after viewed step");
        }
        self.snapshots.truncate(self.step + 1);
        self.snapshots.push(current.with_mark(position, mark));
        self.step = self.snapshots.len() - 1;

        debug!(%mark, %position, step = self.step, "Mark placed");
        self.assert_invariants();

        MoveOutcome::Placed {
            step: self.step,
            mark,
            position,
        }
    }

    /// Views the snapshot at `step`. The history itself is not changed.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::StepOutOfRange`] if no snapshot exists at `step`.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), HistoryError> {
        let len = self.snapshots.len();
        if step >= len {
            warn!(step, len, "Step out of range");
            return Err(HistoryError::StepOutOfRange { step, len });
        }
        self.step = step;
        debug!(step, "Jumped to step");
        Ok(())
    }

    /// Discards all history and starts over.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(moves = self.latest_step(), "Restarting game");
        *self = Self::new();
    }

    /// Read-only projection of the viewed step.
    pub fn current_view(&self) -> GameView {
        let board = *self.current_board();
        let steps = (0..self.snapshots.len())
            .map(|step| HistoryStep::new(step, self.step))
            .collect();
        GameView::new(
            self.step,
            board,
            GameStatus::evaluate(&board, self.step),
            rules::winning_line(&board).map(|(line, _)| line),
            steps,
        )
    }

    /// Status of the viewed snapshot.
    pub fn status(&self) -> GameStatus {
        GameStatus::evaluate(self.current_board(), self.step)
    }

    /// The mark whose turn it is at the viewed step.
    pub fn to_move(&self) -> Mark {
        Mark::for_step(self.step)
    }

    /// The viewed step.
    pub fn step(&self) -> usize {
        self.step
    }

    /// The most recent step.
    pub fn latest_step(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// Number of recorded snapshots, the initial board included.
    pub fn step_count(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns true when the most recent snapshot is the one viewed.
    pub fn is_viewing_latest(&self) -> bool {
        self.step == self.latest_step()
    }

    /// The snapshot at the viewed step.
    pub fn current_board(&self) -> &Board {
        &self.snapshots[self.step]
    }

    /// The snapshot at `step`, if recorded.
    pub fn snapshot(&self, step: usize) -> Option<&Board> {
        self.snapshots.get(step)
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Checks the history invariants in debug builds.
    fn assert_invariants(&self) {
        if cfg!(debug_assertions) {
            let result = HistoryInvariants::check_all(self);
            if let Err(violations) = &result {
                for violation in violations {
                    warn!(invariant = %violation.description, "History invariant violated");
                }
            }
            debug_assert!(result.is_ok(), "History invariants violated: {result:?}");
        }
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}
