//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot, kept apart from history
//! management so they can be tested on hand-built boards.

pub mod win;

pub use win::{LINES, check_winner};
