//! Derived view state: status line and move list.

use super::Mark;
use derive_getters::Getters;
use derive_new::new;

/// Status line shown above the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Status {
    /// The current snapshot has a completed line.
    #[display("Winner: {}", _0)]
    Winner(Mark),
    /// No winner yet; this mark moves next. Also shown on a full board.
    #[display("Next player: {}", _0)]
    NextPlayer(Mark),
}

impl Status {
    /// Returns the winning mark, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Status::Winner(mark) => Some(mark),
            Status::NextPlayer(_) => None,
        }
    }
}

/// One entry in the history navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    step: usize,
    /// Whether this entry is the currently displayed step.
    current: bool,
}

impl MoveEntry {
    /// Button label for this entry.
    pub fn label(&self) -> String {
        if self.step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", self.step)
        }
    }
}

impl std::fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}
