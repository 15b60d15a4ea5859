//! Stateless board widgets.
//!
//! [`CellWidget`] draws one square; [`BoardWidget`] lays nine of them out in
//! row-major order and maps screen coordinates back to positions, which is
//! how mouse clicks find their cell.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::games::tictactoe::{Board, Mark, Position, Square};

/// Width of one cell, borders included.
pub const CELL_WIDTH: u16 = 7;
/// Height of one cell, borders included.
pub const CELL_HEIGHT: u16 = 3;

/// One square of the board.
#[derive(Debug, Clone, Copy)]
pub struct CellWidget {
    square: Square,
    highlighted: bool,
}

impl CellWidget {
    /// Creates a cell for `square`, drawn with the cursor style when `highlighted`.
    pub fn new(square: Square, highlighted: bool) -> Self {
        Self {
            square,
            highlighted,
        }
    }
}

impl Widget for CellWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (symbol, base_style) = match self.square {
            Square::Empty => (" ", Style::default().fg(Color::DarkGray)),
            Square::Occupied(Mark::X) => (
                "x",
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
            Square::Occupied(Mark::O) => (
                "o",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        };

        let (style, border_style) = if self.highlighted {
            (
                base_style.bg(Color::White).fg(Color::Black),
                Style::default().fg(Color::Yellow),
            )
        } else {
            (base_style, Style::default().fg(Color::DarkGray))
        };

        Paragraph::new(Line::from(Span::styled(format!(" {} ", symbol), style)))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            )
            .render(area, buf);
    }
}

/// The 3x3 grid of cells.
#[derive(Debug, Clone, Copy)]
pub struct BoardWidget<'a> {
    board: &'a Board,
    cursor: Option<Position>,
}

impl<'a> BoardWidget<'a> {
    /// Creates a board widget; `cursor` marks the highlighted cell, if any.
    pub fn new(board: &'a Board, cursor: Option<Position>) -> Self {
        Self { board, cursor }
    }

    /// Screen rectangles of the nine cells, in row-major order.
    pub fn cell_rects(area: Rect) -> [Rect; 9] {
        let rows = Layout::vertical([Constraint::Ratio(1, 3); 3]).split(area);
        let cols: Vec<_> = rows
            .iter()
            .map(|row| Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(*row))
            .collect();
        std::array::from_fn(|i| cols[i / 3][i % 3])
    }

    /// Returns the position whose cell contains the given screen coordinate.
    pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<Position> {
        let point = ratatui::layout::Position::new(column, row);
        Position::ALL
            .into_iter()
            .zip(Self::cell_rects(area))
            .find(|(_, rect)| rect.contains(point))
            .map(|(pos, _)| pos)
    }
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (pos, rect) in Position::ALL.into_iter().zip(Self::cell_rects(area)) {
            CellWidget::new(self.board.get(pos), self.cursor == Some(pos)).render(rect, buf);
        }
    }
}
