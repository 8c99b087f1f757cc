//! Core domain types for tic-tac-toe.

use crate::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Player X (moves first).
    #[display("X")]
    X,
    /// Player O.
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Returns the mark that moves from history step `step`.
    ///
    /// Step 0 is the empty board, so X moves on even steps.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Mark::X } else { Mark::O }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Claimed by a player. Never changes afterwards.
    Marked(Mark),
}

impl Cell {
    /// Returns true if no mark has been placed.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }
}

/// An immutable 3x3 board snapshot.
///
/// Cells are stored in row-major order (0-8). A board is never changed in
/// place: placing a mark produces a new board with [`Board::with_mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// The all-empty starting board.
    pub const EMPTY: Board = Board {
        cells: [Cell::Empty; 9],
    };

    /// Creates an empty board.
    pub fn empty() -> Self {
        Self::EMPTY
    }

    /// Creates a board from arbitrary cells.
    ///
    /// No legality checks are made; any combination is accepted.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Returns the cell at `position`.
    pub fn cell(&self, position: Position) -> Cell {
        self.cells[position.index()]
    }

    /// Returns the cell at a raw index, or `None` past the last cell.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Checks if the cell at `position` is empty.
    pub fn is_empty_at(&self, position: Position) -> bool {
        self.cell(position).is_empty()
    }

    /// Returns a new board with `mark` placed at `position`.
    ///
    /// `self` is left untouched.
    #[must_use]
    pub fn with_mark(&self, position: Position, mark: Mark) -> Self {
        let mut cells = self.cells;
        cells[position.index()] = Cell::Marked(mark);
        Self { cells }
    }

    /// Number of cells holding a mark.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.mark() == Some(mark))
            .count()
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.occupied_count() == self.cells.len()
    }

    /// Positions that can still be claimed.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|position| self.is_empty_at(*position))
            .collect()
    }
}

impl fmt::Display for Board {
    /// Renders three rows such as `X|2|O`, empty cells shown by their 1-based number.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => write!(f, "{}", index + 1)?,
                    Cell::Marked(mark) => write!(f, "{mark}")?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
