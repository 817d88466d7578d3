// Home/away goals widget: one gauge per slice, filled to its share of the
// total.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratatui::Frame;

use plstats_core::views::home_away::{HomeAwaySplit, TITLE};

use super::{render_placeholder, to_color};
use crate::tui::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let Some(views) = &state.views else {
        render_placeholder(frame, area, TITLE, "No player selected");
        return;
    };
    let split = &views.home_away;
    if split.total() == 0 {
        render_placeholder(frame, area, split.title, "No goals");
        return;
    }

    let block = Block::default().borders(Borders::ALL).title(split.title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    for (idx, slice) in split.slices.iter().enumerate() {
        let ratio = split.share(idx).unwrap_or(0.0);
        frame.render_widget(
            Paragraph::new(slice.label).style(Style::default().fg(Color::Gray)),
            rows[idx * 2],
        );
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(to_color(slice.color)).bg(Color::Black))
            .ratio(ratio)
            .label(slice_label(split, idx));
        frame.render_widget(gauge, rows[idx * 2 + 1]);
    }
}

/// "14 (61%)"
pub fn slice_label(split: &HomeAwaySplit, idx: usize) -> String {
    let value = split.slices.get(idx).map_or(0, |s| s.value);
    match split.share(idx) {
        Some(share) => format!("{} ({:.0}%)", value, share * 100.0),
        None => value.to_string(),
    }
}
