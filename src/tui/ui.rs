//! UI rendering: title, board pane, info pane, key help.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use tracing::instrument;

use super::app::{App, Focus, HitMap};
use super::widgets::{BoardWidget, CELL_HEIGHT, CELL_WIDTH};
use crate::games::tictactoe::Status;

const BOARD_WIDTH: u16 = 3 * CELL_WIDTH;
const BOARD_HEIGHT: u16 = 3 * CELL_HEIGHT;
const HELP: &str = "←↑↓→ move · Enter select · 1-9 place · Tab switch pane · q quit";

/// Draws the whole screen and records the hit map on `app`.
#[instrument(skip_all)]
pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(BOARD_HEIGHT + 2),
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new(app.title.as_str())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(BOARD_WIDTH + 6), Constraint::Min(24)])
        .split(chunks[1]);

    let board = draw_board(frame, body[0], app);
    let (history, history_offset) = draw_info(frame, body[1], app);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[2]);

    app.hit_map = HitMap {
        board,
        history,
        history_offset,
    };
}

/// Draws the board pane; returns the area covered by the cells.
fn draw_board(frame: &mut Frame, area: Rect, app: &App) -> Rect {
    let block = pane_block("Board", app.focus == Focus::Board);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, BOARD_WIDTH, BOARD_HEIGHT);
    let cursor = (app.focus == Focus::Board).then_some(app.cursor);
    frame.render_widget(BoardWidget::new(app.game.board(), cursor), board_area);
    board_area
}

/// Draws the status line and the history list; returns the list's inner
/// area and scroll offset.
fn draw_info(frame: &mut Frame, area: Rect, app: &mut App) -> (Rect, usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let status = app.game.status();
    let status_style = match status {
        Status::Winner(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Status::NextPlayer(_) => Style::default().fg(Color::Yellow),
    };
    let status_text = Paragraph::new(status.to_string())
        .style(status_style)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status_text, chunks[0]);

    let items: Vec<ListItem> = app
        .game
        .moves()
        .iter()
        .map(|entry| {
            let number = Span::styled(
                format!("{:>2}. ", entry.step() + 1),
                Style::default().fg(Color::DarkGray),
            );
            let label = if *entry.current() {
                Span::styled(
                    entry.label(),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )
            } else {
                Span::raw(entry.label())
            };
            ListItem::new(Line::from(vec![number, label]))
        })
        .collect();

    let focused = app.focus == Focus::History;
    let block = pane_block("History", focused);
    let inner = block.inner(chunks[1]);
    let mut list = List::new(items).block(block);
    if focused {
        list = list
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
    }
    frame.render_stateful_widget(list, chunks[1], &mut app.history_list);

    (inner, app.history_list.offset())
}

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
