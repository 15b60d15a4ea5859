//! Monotonic board invariant: each step adds exactly one mark.

use super::super::{GameState, Square};
use super::Invariant;

/// Invariant: every step fills exactly one previously empty square with
/// the preceding step's next mark, and never overwrites.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        if history.first().is_some_and(|step| step.board().occupied() != 0) {
            return false;
        }

        history.windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            let changed: Vec<_> = before
                .squares()
                .iter()
                .zip(after.squares())
                .filter(|(b, a)| b != a)
                .collect();

            matches!(
                changed.as_slice(),
                [(Square::Empty, Square::Occupied(mark))] if mark == pair[0].next()
            )
        })
    }

    fn description() -> &'static str {
        "Each step fills exactly one empty square with the mover's mark"
    }
}
