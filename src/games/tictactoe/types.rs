//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_more::Display;
use tracing::instrument;

/// A player's mark.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Mark {
    /// Mark `x` (moves first).
    #[display("x")]
    X,
    /// Mark `o` (moves second).
    #[display("o")]
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
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square holding a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark on this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 board snapshot.
///
/// Always exactly nine squares; indexing goes through [`Position`] so it
/// can never fall off the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Returns a copy of this board with `mark` placed at `pos`.
    #[instrument(skip(self))]
    pub fn with_mark(&self, pos: Position, mark: Mark) -> Self {
        let mut next = *self;
        next.set(pos, Square::Occupied(mark));
        next
    }

    /// Formats the board as a compact string, `.` for empty squares.
    pub fn display(&self) -> String {
        let mut result = String::with_capacity(11);
        for (i, square) in self.squares.iter().enumerate() {
            if i > 0 && i % 3 == 0 {
                result.push('/');
            }
            match square {
                Square::Empty => result.push('.'),
                Square::Occupied(mark) => result.push_str(&mark.to_string()),
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.occupied(), 0);
        assert!(Position::ALL.iter().all(|p| board.is_empty(*p)));
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(Position::Center, Mark::X);
        assert!(board.is_empty(Position::Center));
        assert_eq!(next.get(Position::Center), Square::Occupied(Mark::X));
        assert_eq!(next.occupied(), 1);
    }

    #[test]
    fn test_display_rows() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Mark::X)
            .with_mark(Position::Center, Mark::O);
        assert_eq!(board.display(), "x../.o./...");
    }

    #[test]
    fn test_mark_display_is_lowercase() {
        assert_eq!(Mark::X.to_string(), "x");
        assert_eq!(Mark::O.to_string(), "o");
        assert_eq!(Mark::X.opponent(), Mark::O);
    }
}
