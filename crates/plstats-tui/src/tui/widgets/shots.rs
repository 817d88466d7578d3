// Shot breakdown widget: grouped bars per match with a fixed legend.
//
// One bar is always focused. The detail area under the chart spells out its
// full match name, shot type and count, since tick labels are abbreviated.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};
use ratatui::Frame;

use plstats_core::views::shots::{ShotBreakdown, ShotCategory};

use super::{render_placeholder, to_color};
use crate::tui::ViewState;

const TITLE: &str = "Shots";

/// Lines in the focused-bar detail area.
const DETAIL_HEIGHT: u16 = 3;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let Some(views) = &state.views else {
        render_placeholder(frame, area, TITLE, "No player selected");
        return;
    };
    let breakdown = &views.shots;
    if breakdown.is_empty() {
        render_placeholder(frame, area, TITLE, "No match history");
        return;
    }
    let focus = state.focused_shot();

    let block = Block::default().borders(Borders::ALL).title(TITLE);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(DETAIL_HEIGHT),
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(legend_line(breakdown)), parts[0]);

    let mut chart = BarChart::default()
        .bar_width(bar_width(parts[1].width, breakdown.matches.len()))
        .bar_gap(0)
        .group_gap(1)
        .max(u64::from(breakdown.max_count().max(1)));
    for group in build_groups(breakdown, focus) {
        chart = chart.data(group);
    }
    frame.render_widget(chart, parts[1]);

    if let Some(text) = detail_text(breakdown, focus) {
        frame.render_widget(
            Paragraph::new(Text::styled(text, Style::default().fg(Color::Gray))),
            parts[2],
        );
    }
}

/// "■ goals 3  ■ shots off target 6  ■ shots on target blocked 3", with
/// season totals over the listed matches.
pub fn legend_line(breakdown: &ShotBreakdown) -> Line<'static> {
    let mut spans = Vec::with_capacity(breakdown.legend.len() * 2);
    for entry in &breakdown.legend {
        let total: u32 = breakdown.series(entry.category).iter().sum();
        spans.push(Span::styled("■ ", Style::default().fg(to_color(entry.color))));
        spans.push(Span::raw(format!("{} {}  ", entry.label, total)));
    }
    Line::from(spans)
}

/// Hover text for the focused bar.
fn detail_text(
    breakdown: &ShotBreakdown,
    focus: Option<(usize, ShotCategory)>,
) -> Option<String> {
    let (index, category) = focus?;
    breakdown
        .matches
        .get(index)
        .map(|m| m.hover_text(category))
}

fn build_groups(
    breakdown: &ShotBreakdown,
    focus: Option<(usize, ShotCategory)>,
) -> Vec<BarGroup<'static>> {
    breakdown
        .matches
        .iter()
        .enumerate()
        .map(|(index, m)| {
            let bars: Vec<Bar> = ShotCategory::ALL
                .iter()
                .map(|&category| {
                    let color = if focus == Some((index, category)) {
                        Color::White
                    } else {
                        to_color(category.color())
                    };
                    Bar::default()
                        .value(u64::from(m.count(category)))
                        .style(Style::default().fg(color))
                        .value_style(Style::default().fg(Color::Black).bg(color))
                })
                .collect();
            let label_style = if focus.is_some_and(|(i, _)| i == index) {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            BarGroup::default()
                .label(Line::styled(m.match_short.clone(), label_style))
                .bars(&bars)
        })
        .collect()
}

/// Three bars per group plus a one-column gap between groups.
fn bar_width(width: u16, groups: usize) -> u16 {
    if groups == 0 {
        return 1;
    }
    let per_group = width / groups as u16;
    (per_group.saturating_sub(1) / 3).clamp(1, 4)
}
