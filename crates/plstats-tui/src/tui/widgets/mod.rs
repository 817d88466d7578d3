// TUI widget modules for each dashboard panel.

pub mod grid;
pub mod header;
pub mod home_away;
pub mod player_list;
pub mod radar;
pub mod rating;
pub mod shots;
pub mod status_bar;
pub mod tree;

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Turn a view-model colour (`#RRGGBB` or a named colour) into a terminal
/// colour.
pub fn to_color(value: &str) -> Color {
    value.parse().unwrap_or(Color::Reset)
}

/// Bordered panel with a dimmed centred message, for empty data.
pub fn render_placeholder(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let paragraph = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    frame.render_widget(paragraph, area);
}
