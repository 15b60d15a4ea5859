//! History consistency invariant: shape of the history and pointer.

use super::super::GameState;
use super::super::rules::check_winner;
use super::Invariant;

/// Invariant: the history is never empty, the pointer is in range, and no
/// step follows a snapshot that already had a winner.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        if history.is_empty() || state.step_number() >= history.len() {
            return false;
        }

        history
            .iter()
            .rev()
            .skip(1)
            .all(|step| check_winner(step.board()).is_none())
    }

    fn description() -> &'static str {
        "History is non-empty, pointer is in range, no move after a win"
    }
}
