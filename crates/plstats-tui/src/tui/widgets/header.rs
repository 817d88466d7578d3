// Header widget: player name, age and club with crest status.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use plstats_core::views::PlayerHeader;

use crate::assets::Crest;
use crate::tui::ViewState;

pub const APP_TITLE: &str = "Premier league | Player Analytics";

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let line = match &state.views {
        Some(views) => build_header_line(&views.header, &state.crest),
        None => Line::from(Span::styled(
            " Loading player data...",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {APP_TITLE} "),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}

fn build_header_line(header: &PlayerHeader, crest: &Crest) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", header.name),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("| ", Style::default().fg(Color::DarkGray)),
        Span::styled(header.age.clone(), Style::default().fg(Color::Cyan)),
        Span::styled(
            format!(" {} ", header.age_caption),
            Style::default().fg(Color::Gray),
        ),
    ];

    if let Some(team) = &header.team {
        spans.push(Span::styled("| ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(team.clone(), Style::default().fg(Color::Green)));
    }
    spans.push(Span::styled(
        format!("  {}", crest_label(crest)),
        Style::default().fg(Color::DarkGray),
    ));

    Line::from(spans)
}

/// Short description of the crest image for a text-only terminal.
pub fn crest_label(crest: &Crest) -> String {
    match crest {
        Crest::Found(path) => format!("[crest: {}]", path.display()),
        Crest::Missing(path) => format!("[no crest at {}]", path.display()),
        Crest::Unknown => "[club unknown]".to_string(),
    }
}
