//! Tic-tac-toe with a rewindable move history.
//!
//! # Architecture
//!
//! - **Games**: board types, the win evaluator, and [`GameState`], an owned
//!   history of [`Step`]s with a pointer, advanced by a pure reducer
//!   ([`GameState::dispatch`]).
//! - **TUI**: a `ratatui` frontend that renders the board and the history
//!   navigator and turns key presses and mouse clicks into [`Action`]s.
//! - **Settings**: optional TOML configuration for the binary.
//!
//! # Example
//!
//! ```
//! use tictactoe_rewind::{Action, GameState, Mark, Position, Status};
//!
//! let game = GameState::new()
//!     .dispatch(Action::ClickCell(Position::Center))
//!     .dispatch(Action::ClickCell(Position::TopLeft))
//!     .dispatch(Action::JumpTo(1));
//!
//! assert_eq!(game.status(), Status::NextPlayer(Mark::O));
//! assert_eq!(game.status().to_string(), "Next player: o");
//! assert_eq!(game.history().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod games;
mod settings;
pub mod tui;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Action, Board, GameState, Mark, MoveEntry, Position, PositionError, Rejection, Square,
    Status, Step, check_winner,
};

// Crate-level exports - Invariants
pub use games::tictactoe::invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MonotonicBoardInvariant, TicTacToeInvariants,
};

// Crate-level exports - Rules
pub use games::tictactoe::rules::LINES;

// Crate-level exports - Settings
pub use settings::{Settings, SettingsError};
