//! Alternating turn invariant: x, o, x, o, ...

use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: the next mark alternates step by step, starting with `x`.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().iter().enumerate().all(|(i, step)| {
            let expected = if i % 2 == 0 { Mark::X } else { Mark::O };
            *step.next() == expected
        })
    }

    fn description() -> &'static str {
        "Next mark alternates (x, o, x, ...) starting with x"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Action, Position, Step};

    #[test]
    fn test_new_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let state = [
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
        ]
        .into_iter()
        .fold(GameState::new(), |state, pos| {
            state.dispatch(Action::ClickCell(pos))
        });
        assert!(AlternatingTurnInvariant::holds(&state));
        assert_eq!(*state.current().next(), Mark::X);
    }

    #[test]
    fn test_repeated_mark_violates() {
        let mut state = GameState::new();
        state.history.push(Step::new(
            state.board().with_mark(Position::Center, Mark::X),
            Mark::X,
        ));
        assert!(!AlternatingTurnInvariant::holds(&state));
    }
}
