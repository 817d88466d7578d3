// Status bar widget: selected player, selection generation, WebSocket
// clients and the last rejection notice. The help bar below it lists keys.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::ViewState;

/// Render the status bar into the given area.
///
/// Layout: [player] [generation] [ws clients] [notice]
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let mut spans = Vec::new();

    let (player, player_style) = match state.current_key() {
        Some(key) => (
            key.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        None => ("no selection".to_string(), Style::default().fg(Color::Gray)),
    };
    spans.push(Span::styled(format!(" {} ", player), player_style));

    if let Some(views) = &state.views {
        spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));
        spans.push(Span::styled(
            format!("gen {}", views.generation),
            Style::default().fg(Color::Gray),
        ));
    }

    spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));
    let (dot, dot_color) = client_indicator(state.ws_clients);
    spans.push(Span::styled(format!("{} ", dot), Style::default().fg(dot_color)));
    spans.push(Span::styled(
        client_label(state.ws_clients),
        Style::default().fg(Color::White),
    ));

    if let Some(message) = &state.status_message {
        spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

/// Render the key hint line.
pub fn render_help(frame: &mut Frame, area: Rect, state: &ViewState) {
    let paragraph = Paragraph::new(Line::from(help_spans(state.filter_mode)))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

/// Green once anything is connected.
pub fn client_indicator(count: usize) -> (&'static str, Color) {
    if count > 0 {
        ("●", Color::Green)
    } else {
        ("●", Color::DarkGray)
    }
}

pub fn client_label(count: usize) -> String {
    match count {
        1 => "1 client".to_string(),
        n => format!("{} clients", n),
    }
}

fn help_spans(filter_mode: bool) -> Vec<Span<'static>> {
    let hints: &[(&str, &str)] = if filter_mode {
        &[("type", "filter"), ("Enter", "keep"), ("Esc", "clear"), ("Bksp", "delete")]
    } else {
        &[
            ("↑↓/jk", "move"),
            ("Enter", "select"),
            ("←→/hl", "shots"),
            ("/", "filter"),
            ("r", "refresh"),
            ("q", "quit"),
        ]
    };

    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, action) in hints {
        spans.push(Span::styled(
            format!(" {} ", key),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Gray),
        ));
        spans.push(Span::styled(
            format!(" {} ", action),
            Style::default().fg(Color::Gray),
        ));
    }
    spans
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
