// Stat grid widget: twelve season totals, four rows by three columns.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use plstats_core::views::grid::{StatCell, GRID_COLUMNS, GRID_ROWS};

use super::render_placeholder;
use crate::tui::ViewState;

const TITLE: &str = "Season totals";

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let Some(views) = &state.views else {
        render_placeholder(frame, area, TITLE, "No player selected");
        return;
    };

    let block = Block::default().borders(Borders::ALL).title(TITLE);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, GRID_ROWS as u32); GRID_ROWS])
        .split(inner);

    for (r, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
            .split(*row_area);
        for (c, cell_area) in cols.iter().enumerate() {
            if let Some(cell) = views.grid.cell(r, c) {
                frame.render_widget(
                    Paragraph::new(cell_lines(cell, cell_area.height)),
                    *cell_area,
                );
            }
        }
    }
}

/// Label above value when there are two rows to spare, otherwise
/// "Label: value" on one line.
fn cell_lines(cell: &StatCell, height: u16) -> Vec<Line<'static>> {
    let label_style = Style::default().fg(Color::Gray);
    let value = Span::styled(
        cell.value.clone(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );
    if height >= 2 {
        vec![
            Line::from(Span::styled(cell.label, label_style)),
            Line::from(value),
        ]
    } else {
        vec![Line::from(vec![
            Span::styled(format!("{}: ", cell.label), label_style),
            value,
        ])]
    }
}
