// Rating trend widget: one bar per match, labelled with the short match
// name and topped with the one-decimal rating.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders};
use ratatui::Frame;

use plstats_core::views::rating::RatingTrend;

use super::{render_placeholder, to_color};
use crate::tui::ViewState;

const TITLE: &str = "Rating";

/// Ratings are 0-10 with one decimal; bars carry tenths.
const SCALE: f64 = 10.0;
const MAX_BAR: u64 = 100;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let Some(views) = &state.views else {
        render_placeholder(frame, area, TITLE, "No player selected");
        return;
    };
    if views.rating.is_empty() {
        render_placeholder(frame, area, TITLE, "No match history");
        return;
    }

    let trend = &views.rating;
    let bars = build_bars(trend);
    let inner_width = area.width.saturating_sub(2);

    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(title(trend)))
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width(inner_width, bars.len()))
        .bar_gap(1)
        .max(MAX_BAR);
    frame.render_widget(chart, area);
}

/// "Rating (best 8.7)" once there is any history.
fn title(trend: &RatingTrend) -> String {
    match trend.max_rating() {
        Some(best) => format!("{TITLE} (best {best:.1})"),
        None => TITLE.to_string(),
    }
}

fn build_bars(trend: &RatingTrend) -> Vec<Bar<'static>> {
    let color = to_color(trend.color);
    trend
        .points
        .iter()
        .map(|p| {
            Bar::default()
                .value(scaled(p.rating))
                .text_value(format!("{:.1}", p.rating))
                .label(Line::from(p.match_short.clone()))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect()
}

fn scaled(rating: f64) -> u64 {
    (rating.max(0.0) * SCALE).round() as u64
}

/// Widest bar that still fits every match, never narrower than the
/// one-decimal value text.
fn bar_width(inner_width: u16, bars: usize) -> u16 {
    if bars == 0 {
        return 1;
    }
    let per_bar = inner_width / bars as u16;
    per_bar.saturating_sub(1).clamp(1, 8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::test_support::state_with;

    #[test]
    fn ratings_scale_to_tenths() {
        assert_eq!(scaled(7.3), 73);
        assert_eq!(scaled(10.0), 100);
        assert_eq!(scaled(-1.0), 0);
    }

    #[test]
    fn bar_width_shrinks_with_match_count() {
        assert_eq!(bar_width(60, 3), 8);
        assert_eq!(bar_width(60, 10), 5);
        assert_eq!(bar_width(10, 40), 1);
        assert_eq!(bar_width(10, 0), 1);
    }

    #[test]
    fn title_carries_best_rating() {
        let state = state_with("Mohamed Salah");
        assert_eq!(title(&state.views.as_ref().unwrap().rating), "Rating (best 8.7)");
        let empty = state_with("Aaron Ramsdale");
        assert_eq!(title(&empty.views.as_ref().unwrap().rating), "Rating");
    }

    #[test]
    fn one_bar_per_match() {
        let state = state_with("Mohamed Salah");
        let trend = &state.views.as_ref().unwrap().rating;
        assert_eq!(build_bars(trend).len(), trend.points.len());
    }

    #[test]
    fn render_does_not_panic_with_history() {
        let backend = ratatui::backend::TestBackend::new(60, 15);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = state_with("Mohamed Salah");
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }

    #[test]
    fn empty_history_shows_placeholder() {
        let backend = ratatui::backend::TestBackend::new(60, 15);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = state_with("Aaron Ramsdale");
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("No match history"));
    }
}
