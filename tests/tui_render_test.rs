//! Rendering tests for the terminal UI against a test backend.

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use tictactoe_rewind::Position;
use tictactoe_rewind::tui::{App, BoardWidget, Input, draw};

fn render(terminal: &mut Terminal<TestBackend>, app: &mut App) -> String {
    terminal.draw(|f| draw(f, app)).expect("draw");
    buffer_text(terminal.backend().buffer())
}

fn buffer_text(buffer: &Buffer) -> String {
    let width = usize::from(buffer.area.width);
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 24)).expect("terminal")
}

fn click_cell(app: &mut App, pos: Position) {
    let rect = BoardWidget::cell_rects(app.hit_map().board)[pos.to_index()];
    app.handle_input(Input::Click {
        column: rect.x + rect.width / 2,
        row: rect.y + rect.height / 2,
    });
}

#[test]
fn test_initial_screen() {
    let mut terminal = terminal();
    let mut app = App::new("Tic Tac Toe".to_string());
    let text = render(&mut terminal, &mut app);

    assert!(text.contains("Tic Tac Toe"));
    assert!(text.contains("Next player: x"));
    assert!(text.contains("Go to game start"));
    assert!(!text.contains("Go to move #1"));
}

#[test]
fn test_mouse_clicks_play_and_rewind() {
    let mut terminal = terminal();
    let mut app = App::new("Tic Tac Toe".to_string());
    render(&mut terminal, &mut app);

    for pos in [Position::TopLeft, Position::MiddleLeft, Position::Center] {
        click_cell(&mut app, pos);
        render(&mut terminal, &mut app);
    }
    let text = render(&mut terminal, &mut app);
    assert!(text.contains("Next player: o"));
    assert!(text.contains("Go to move #3"));

    // Second list row is "Go to move #1".
    let list = app.hit_map().history;
    app.handle_input(Input::Click {
        column: list.x + 2,
        row: list.y + 1,
    });
    assert_eq!(app.game().step_number(), 1);
    let text = render(&mut terminal, &mut app);
    assert!(text.contains("Next player: o"));
    assert!(text.contains("Go to move #3"));

    click_cell(&mut app, Position::BottomRight);
    let text = render(&mut terminal, &mut app);
    assert_eq!(app.game().history().len(), 3);
    assert!(text.contains("Go to move #2"));
    assert!(!text.contains("Go to move #3"));
}

#[test]
fn test_winner_shown() {
    let mut terminal = terminal();
    let mut app = App::new("Tic Tac Toe".to_string());
    for pos in [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomRight,
    ] {
        app.handle_input(Input::Place(pos));
    }
    let text = render(&mut terminal, &mut app);
    assert!(text.contains("Winner: x"));

    app.handle_input(Input::Place(Position::TopRight));
    assert_eq!(app.game().history().len(), 6);
}
