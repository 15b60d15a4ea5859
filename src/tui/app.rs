//! Application state and input handling.

use ratatui::{layout::Rect, widgets::ListState};
use tracing::{debug, info, instrument};

use super::input::{Arrow, Input, move_cursor};
use super::widgets::BoardWidget;
use crate::games::tictactoe::{Action, GameState, Position};

/// Which pane receives arrow keys and `Enter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The board: arrows move the cursor, `Enter` places a mark.
    #[default]
    Board,
    /// The history: arrows select an entry, `Enter` jumps to it.
    History,
}

impl Focus {
    /// Toggles between `Board` and `History`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// Screen regions recorded by the last draw, for mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HitMap {
    /// Area covered by the nine cells.
    pub board: Rect,
    /// Inner area of the history list.
    pub history: Rect,
    /// Index of the first visible history entry.
    pub history_offset: usize,
}

impl HitMap {
    /// Position under the given coordinate, if it falls on a cell.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        BoardWidget::cell_at(self.board, column, row)
    }

    /// History entry under the given coordinate, if it falls on the list.
    ///
    /// The caller checks the result against the history length.
    pub fn entry_at(&self, column: u16, row: u16) -> Option<usize> {
        self.history
            .contains(ratatui::layout::Position::new(column, row))
            .then(|| self.history_offset + usize::from(row - self.history.y))
    }
}

/// Main application state.
///
/// Owns the [`GameState`] and feeds it actions derived from input.
#[derive(Debug)]
pub struct App {
    pub(super) game: GameState,
    pub(super) cursor: Position,
    pub(super) focus: Focus,
    pub(super) history_list: ListState,
    pub(super) hit_map: HitMap,
    pub(super) title: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument]
    pub fn new(title: String) -> Self {
        Self {
            game: GameState::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            history_list: ListState::default().with_selected(Some(0)),
            hit_map: HitMap::default(),
            title,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Gets the selected history entry.
    pub fn selected_entry(&self) -> usize {
        self.history_list.selected().unwrap_or(0)
    }

    /// Gets the regions recorded by the last draw.
    pub fn hit_map(&self) -> HitMap {
        self.hit_map
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one input.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_input(&mut self, input: Input) {
        debug!(?input, "Handling input");

        match input {
            Input::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Input::ToggleFocus => self.focus = self.focus.toggle(),
            Input::Arrow(arrow) => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, arrow),
                Focus::History => self.move_selection(arrow),
            },
            Input::Activate => match self.focus {
                Focus::Board => self.dispatch(Action::ClickCell(self.cursor)),
                Focus::History => self.dispatch(Action::JumpTo(self.selected_entry())),
            },
            Input::Place(pos) => {
                self.focus = Focus::Board;
                self.cursor = pos;
                self.dispatch(Action::ClickCell(pos));
            }
            Input::Click { column, row } => self.click(column, row),
        }
    }

    fn click(&mut self, column: u16, row: u16) {
        if let Some(pos) = self.hit_map.cell_at(column, row) {
            self.focus = Focus::Board;
            self.cursor = pos;
            self.dispatch(Action::ClickCell(pos));
        } else if let Some(step) = self
            .hit_map
            .entry_at(column, row)
            .filter(|step| *step < self.game.history().len())
        {
            self.focus = Focus::History;
            self.dispatch(Action::JumpTo(step));
        } else {
            debug!(column, row, "Click outside any target");
        }
    }

    fn move_selection(&mut self, arrow: Arrow) {
        let last = self.game.history().len() - 1;
        let selected = self.selected_entry();
        let next = match arrow {
            Arrow::Up | Arrow::Left => selected.saturating_sub(1),
            Arrow::Down | Arrow::Right => (selected + 1).min(last),
        };
        self.history_list.select(Some(next));
    }

    /// Runs the reducer and keeps the history selection on the current step.
    fn dispatch(&mut self, action: Action) {
        let game = std::mem::take(&mut self.game);
        self.game = game.dispatch(action);
        self.history_list.select(Some(self.game.step_number()));
    }
}
