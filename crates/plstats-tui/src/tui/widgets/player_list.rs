// Player picker widget: filterable list of every selectable player.
//
// Cursor row highlighted, player on screen marked with a bullet.
// Title shows the filter text and the match count.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

use crate::tui::ViewState;

/// Render the picker into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let filtered = state.filtered_players();
    let current = state.current_key();

    let items: Vec<ListItem> = filtered
        .iter()
        .map(|name| {
            let is_current = current == Some(*name);
            let (marker, style) = if is_current {
                (
                    "● ",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default())
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(name.to_string(), style),
            ]))
        })
        .collect();

    let title = build_title(state, filtered.len());
    let border_style = if state.filter_mode {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let selected = if filtered.is_empty() {
        None
    } else {
        Some(state.cursor)
    };
    let mut list_state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Build the title with filter info and match count.
fn build_title(state: &ViewState, filtered_count: usize) -> Line<'static> {
    let mut title = String::from("Players");
    if !state.filter_text.is_empty() || state.filter_mode {
        title.push_str(&format!(" [/{}]", state.filter_text));
    }
    title.push_str(&format!(" ({}/{})", filtered_count, state.players.len()));
    Line::from(title)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
