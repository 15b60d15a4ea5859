//! First-class action types for tic-tac-toe.
//!
//! Every interaction with the game is an [`Action`] fed to
//! [`GameState::dispatch`](super::GameState::dispatch). Actions the rules
//! refuse are reported as a [`Rejection`] and leave the state unchanged.

use super::{Mark, Position};

/// A player interaction with the game controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// The player activated the square at this position.
    ClickCell(Position),
    /// The player selected a history entry to rewind (or fast-forward) to.
    JumpTo(usize),
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::ClickCell(pos) => write!(f, "click {}", pos.label()),
            Action::JumpTo(step) => write!(f, "jump to step {}", step),
        }
    }
}

/// Why an action was ignored.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// The current snapshot already has a winner.
    #[display("Game already won by {}", _0)]
    GameWon(Mark),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The jump target is not a step in the history.
    #[display("Step {} is outside the history (length {})", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

impl std::error::Error for Rejection {}
