//! Tic-tac-toe with a rewindable move history.

mod action;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod step;
mod types;
mod view;

pub use action::{Action, Rejection};
pub use game::GameState;
pub use position::{Position, PositionError};
pub use rules::check_winner;
pub use step::Step;
pub use types::{Board, Mark, Square};
pub use view::{MoveEntry, Status};
