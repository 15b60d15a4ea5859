//! Named board positions.

use derive_more::{Display, Error};
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
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

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
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

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Creates position from row and column, each 0-2.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Parses a 1-based keypad digit (`'1'` is top-left, `'9'` bottom-right).
    #[instrument]
    pub fn from_digit(c: char) -> Option<Self> {
        let digit = c.to_digit(10)? as usize;
        digit.checked_sub(1).and_then(Self::from_index)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Board index outside 0-8.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Position {} out of bounds (must be 0-8) at {}:{}", index, file, line)]
pub struct PositionError {
    /// The rejected index.
    pub index: usize,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl PositionError {
    /// Creates a new position error with caller location tracking.
    #[track_caller]
    pub fn new(index: usize) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            index,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl TryFrom<usize> for Position {
    type Error = PositionError;

    #[track_caller]
    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or_else(|| PositionError::new(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_index_round_trips_through_row_col() {
        for pos in Position::iter() {
            assert_eq!(Position::from_row_col(pos.row(), pos.col()), Some(pos));
        }
    }

    #[test]
    fn test_row_col_out_of_range() {
        assert_eq!(Position::from_row_col(3, 0), None);
        assert_eq!(Position::from_row_col(0, 3), None);
    }

    #[test]
    fn test_from_digit() {
        assert_eq!(Position::from_digit('1'), Some(Position::TopLeft));
        assert_eq!(Position::from_digit('5'), Some(Position::Center));
        assert_eq!(Position::from_digit('9'), Some(Position::BottomRight));
        assert_eq!(Position::from_digit('0'), None);
        assert_eq!(Position::from_digit('a'), None);
    }

    #[test]
    fn test_try_from_rejects_nine() {
        let err = Position::try_from(9).unwrap_err();
        assert_eq!(err.index, 9);
        assert!(err.to_string().contains("out of bounds"));
    }
}
