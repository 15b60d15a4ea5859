//! A single turn step: a board snapshot plus whose turn is next.

use super::{Board, Mark, Position};
use derive_getters::Getters;
use derive_new::new;

/// Immutable pair of board snapshot and the mark that moves next.
///
/// Steps are created once per accepted move and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, new)]
pub struct Step {
    /// Board after this step's move.
    board: Board,
    /// Mark to place on the next move.
    next: Mark,
}

impl Step {
    /// The first step of every game: empty board, `x` to move.
    pub fn initial() -> Self {
        Self::new(Board::new(), Mark::X)
    }

    /// Returns the step that follows placing the next mark at `pos`.
    ///
    /// No rule checks happen here; callers validate first.
    pub fn advance(&self, pos: Position) -> Self {
        Self::new(self.board.with_mark(pos, self.next), self.next.opponent())
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::initial()
    }
}
