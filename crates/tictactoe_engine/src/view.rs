//! Read-only projection of a game for the presentation layer.

use crate::{Board, Mark, Position, rules};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of the viewed board.
///
/// Never stored; always recomputed from the viewed snapshot and its step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing, the mark is the player to move.
    InProgress(Mark),
    /// A player completed a line.
    Won(Mark),
    /// The board is full with no line.
    Drawn,
}

impl GameStatus {
    /// Evaluates `board` as viewed at history step `step`.
    pub fn evaluate(board: &Board, step: usize) -> Self {
        if let Some(mark) = rules::winner(board) {
            GameStatus::Won(mark)
        } else if board.is_full() {
            GameStatus::Drawn
        } else {
            GameStatus::InProgress(Mark::for_step(step))
        }
    }

    /// Returns true once no further move can be made from this board.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::Won(mark) => Some(mark),
            _ => None,
        }
    }

    /// Returns the player to move while the game is in progress.
    pub fn to_move(self) -> Option<Mark> {
        match self {
            GameStatus::InProgress(mark) => Some(mark),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress(mark) => write!(f, "Next player: {mark}"),
            GameStatus::Won(mark) => write!(f, "Winner: {mark}"),
            GameStatus::Drawn => write!(f, "Draw"),
        }
    }
}

/// One entry of the navigable move list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct HistoryStep {
    /// Index into the history.
    step: usize,
    /// "Go to game start" for step 0, "Go to move #N" otherwise.
    label: String,
    /// Whether this is the step being viewed.
    is_current: bool,
}

impl HistoryStep {
    /// Creates the entry for `step`, flagged if it is `current`.
    pub fn new(step: usize, current: usize) -> Self {
        let label = if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{step}")
        };
        Self {
            step,
            label,
            is_current: step == current,
        }
    }
}

impl fmt::Display for HistoryStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Everything a renderer needs to draw the current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct GameView {
    /// The viewed step.
    step: usize,
    /// Snapshot at that step.
    board: Board,
    /// Status of the snapshot.
    status: GameStatus,
    /// The completed line when the snapshot is won.
    winning_line: Option<[Position; 3]>,
    /// Every step that can be jumped to, oldest first.
    steps: Vec<HistoryStep>,
}
