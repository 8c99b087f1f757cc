//! Named board positions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell position on the board.
///
/// Discriminants match the row-major cell index (0-8).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

/// Cursor movement on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Creates a position from a board index, `None` outside 0-8.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a position from a zero-based row and column.
    pub fn from_row_column(row: usize, column: usize) -> Option<Self> {
        if row < 3 && column < 3 {
            Self::from_index(row * 3 + column)
        } else {
            None
        }
    }

    /// Board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Zero-based column.
    pub fn column(self) -> usize {
        self.index() % 3
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// The adjacent position in `direction`, or `self` at the edge of the grid.
    pub fn neighbor(self, direction: Direction) -> Self {
        let (row, column) = (self.row(), self.column());
        let target = match direction {
            Direction::Up => row.checked_sub(1).map(|row| (row, column)),
            Direction::Down => Some((row + 1, column)),
            Direction::Left => column.checked_sub(1).map(|column| (row, column)),
            Direction::Right => Some((row, column + 1)),
        };
        target
            .and_then(|(row, column)| Self::from_row_column(row, column))
            .unwrap_or(self)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_index_matches_declaration_order() {
        for (index, position) in Position::iter().enumerate() {
            assert_eq!(position.index(), index);
            assert_eq!(Position::from_index(index), Some(position));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_row_column() {
        assert_eq!(Position::MiddleRight.row(), 1);
        assert_eq!(Position::MiddleRight.column(), 2);
        assert_eq!(Position::from_row_column(2, 0), Some(Position::BottomLeft));
        assert_eq!(Position::from_row_column(3, 0), None);
    }

    #[test]
    fn test_neighbor_moves_within_grid() {
        assert_eq!(Position::Center.neighbor(Direction::Up), Position::TopCenter);
        assert_eq!(Position::Center.neighbor(Direction::Down), Position::BottomCenter);
        assert_eq!(Position::Center.neighbor(Direction::Left), Position::MiddleLeft);
        assert_eq!(Position::Center.neighbor(Direction::Right), Position::MiddleRight);
    }

    #[test]
    fn test_neighbor_clamps_at_edges() {
        assert_eq!(Position::TopLeft.neighbor(Direction::Up), Position::TopLeft);
        assert_eq!(Position::TopLeft.neighbor(Direction::Left), Position::TopLeft);
        assert_eq!(Position::BottomRight.neighbor(Direction::Down), Position::BottomRight);
        assert_eq!(Position::TopRight.neighbor(Direction::Right), Position::TopRight);
    }
}
