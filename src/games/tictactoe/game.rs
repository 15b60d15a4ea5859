//! Game controller: move history, current step pointer, and the reducer.
//!
//! All state lives in [`GameState`]. Interactions are applied with
//! [`GameState::dispatch`], which consumes the state and returns the next
//! one. Refused actions return the state unchanged.

use super::action::{Action, Rejection};
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::rules::check_winner;
use super::step::Step;
use super::view::{MoveEntry, Status};
use super::{Board, Mark, Position};
use tracing::{debug, info, instrument, warn};

/// Complete game state: the history of steps and the current pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Steps from game start to the latest move made. Never empty.
    pub(super) history: Vec<Step>,
    /// Index of the displayed step, always `< history.len()`.
    pub(super) step_number: usize,
}

impl GameState {
    /// Creates a new game: one empty step, `x` to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Step::initial()],
            step_number: 0,
        }
    }

    /// Returns the full history, including steps past the pointer.
    pub fn history(&self) -> &[Step] {
        &self.history
    }

    /// Returns the current pointer.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// Returns the step at the pointer.
    pub fn current(&self) -> &Step {
        &self.history[self.step_number]
    }

    /// Returns the board at the pointer.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Returns the winner on the current snapshot, if any.
    pub fn winner(&self) -> Option<Mark> {
        check_winner(self.board())
    }

    /// Status line for the current snapshot.
    pub fn status(&self) -> Status {
        match self.winner() {
            Some(mark) => Status::Winner(mark),
            None => Status::NextPlayer(*self.current().next()),
        }
    }

    /// One navigator entry per step in the history.
    pub fn moves(&self) -> Vec<MoveEntry> {
        (0..self.history.len())
            .map(|step| MoveEntry::new(step, step == self.step_number))
            .collect()
    }

    /// Applies an action, returning the next state.
    ///
    /// Refused actions are logged and return `self` unchanged.
    #[instrument(skip(self), fields(step = self.step_number, len = self.history.len(), %action))]
    pub fn dispatch(self, action: Action) -> Self {
        let next = match action {
            Action::ClickCell(pos) => self.click_cell(pos),
            Action::JumpTo(step) => self.jump_to(step),
        };

        if cfg!(debug_assertions)
            && let Err(violations) = TicTacToeInvariants::check_all(&next)
        {
            panic!("Invariant violation after {}: {:?}", action, violations);
        }

        next
    }

    /// Checks whether a click on `pos` would be accepted.
    pub fn check_click(&self, pos: Position) -> Result<(), Rejection> {
        if let Some(winner) = self.winner() {
            return Err(Rejection::GameWon(winner));
        }
        if !self.board().is_empty(pos) {
            return Err(Rejection::SquareOccupied(pos));
        }
        Ok(())
    }

    /// Places the next mark at `pos` on the current step.
    ///
    /// Discards any steps past the pointer before appending.
    #[instrument(skip(self), fields(step = self.step_number))]
    pub fn click_cell(mut self, pos: Position) -> Self {
        if let Err(rejection) = self.check_click(pos) {
            debug!(%rejection, "Ignoring click");
            return self;
        }

        let next = self.current().advance(pos);
        let discarded = self.history.len() - (self.step_number + 1);
        if discarded > 0 {
            debug!(discarded, "Truncating future history");
        }
        self.history.truncate(self.step_number + 1);
        self.history.push(next);
        self.step_number = self.history.len() - 1;

        info!(
            position = %pos,
            board = %next.board().display(),
            step = self.step_number,
            "Move applied"
        );
        self
    }

    /// Moves the pointer to `step` without touching the history.
    #[instrument(skip(self))]
    pub fn jump_to(mut self, step: usize) -> Self {
        if step >= self.history.len() {
            let rejection = Rejection::StepOutOfRange {
                step,
                len: self.history.len(),
            };
            warn!(%rejection, "Ignoring jump");
            return self;
        }
        self.step_number = step;
        debug!(step, "Pointer moved");
        self
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
