//! Terminal events to application inputs, and cursor movement.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::games::tictactoe::Position;

/// Arrow key direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrow {
    /// Up.
    Up,
    /// Down.
    Down,
    /// Left.
    Left,
    /// Right.
    Right,
}

/// Input understood by [`App`](super::App).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Move the cursor (board) or the selection (history).
    Arrow(Arrow),
    /// Activate the focused item.
    Activate,
    /// Switch focus between the board and the history.
    ToggleFocus,
    /// Place a mark directly via the number keys.
    Place(Position),
    /// Left mouse button pressed at a screen coordinate.
    Click {
        /// Column.
        column: u16,
        /// Row.
        row: u16,
    },
    /// Leave the application.
    Quit,
}

/// Maps a terminal event to an input, ignoring everything else.
pub fn map_event(event: &Event) -> Option<Input> {
    match event {
        // Skip key release events (crossterm fires both press and release on some platforms).
        Event::Key(key) if key.kind != KeyEventKind::Release => map_key(key),
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => Some(Input::Click {
            column: *column,
            row: *row,
        }),
        _ => None,
    }
}

/// Maps a key press to an input.
pub fn map_key(key: &KeyEvent) -> Option<Input> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Input::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Input::Quit),
        KeyCode::Up => Some(Input::Arrow(Arrow::Up)),
        KeyCode::Down => Some(Input::Arrow(Arrow::Down)),
        KeyCode::Left => Some(Input::Arrow(Arrow::Left)),
        KeyCode::Right => Some(Input::Arrow(Arrow::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Input::Activate),
        KeyCode::Tab | KeyCode::BackTab => Some(Input::ToggleFocus),
        KeyCode::Char(c) => Position::from_digit(c).map(Input::Place),
        _ => None,
    }
}

/// Moves the board cursor one square, stopping at the edges.
pub fn move_cursor(cursor: Position, arrow: Arrow) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match arrow {
        Arrow::Up => row.checked_sub(1).map(|r| (r, col)),
        Arrow::Down => Some((row + 1, col)),
        Arrow::Left => col.checked_sub(1).map(|c| (row, c)),
        Arrow::Right => Some((row, col + 1)),
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_move_cursor_within_board() {
        assert_eq!(move_cursor(Position::Center, Arrow::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, Arrow::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::Center, Arrow::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, Arrow::Right), Position::MiddleRight);
    }

    #[test]
    fn test_move_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, Arrow::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, Arrow::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::MiddleRight, Arrow::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::BottomCenter, Arrow::Down), Position::BottomCenter);
    }

    #[test]
    fn test_map_keys() {
        assert_eq!(map_event(&press(KeyCode::Char('q'))), Some(Input::Quit));
        assert_eq!(map_event(&press(KeyCode::Enter)), Some(Input::Activate));
        assert_eq!(map_event(&press(KeyCode::Tab)), Some(Input::ToggleFocus));
        assert_eq!(
            map_event(&press(KeyCode::Char('7'))),
            Some(Input::Place(Position::BottomLeft))
        );
        assert_eq!(map_event(&press(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(map_event(&event), Some(Input::Quit));
    }

    #[test]
    fn test_key_release_ignored() {
        let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(map_event(&Event::Key(key)), None);
    }

    #[test]
    fn test_left_click_maps_to_coordinates() {
        let event = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 4,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(map_event(&event), Some(Input::Click { column: 12, row: 4 }));
    }
}
