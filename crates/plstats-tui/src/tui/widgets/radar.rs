// Defensive radar widget: six spokes and a closed polygon on a braille
// canvas.

use std::f64::consts::{FRAC_PI_2, TAU};

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Context, Line as CanvasLine};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use plstats_core::views::radar::DefensiveRadar;

use super::{render_placeholder, to_color};
use crate::tui::ViewState;

const TITLE: &str = "Defensive";

/// Canvas units from centre to the outer ring.
const RADIUS: f64 = 1.0;
/// Labels sit a little outside the outer ring.
const LABEL_RADIUS: f64 = 1.15;
/// Interpolation steps per edge when filling the polygon.
const FILL_STEPS: usize = 12;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let Some(views) = &state.views else {
        render_placeholder(frame, area, TITLE, "No player selected");
        return;
    };
    let radar = &views.radar;
    let vertices = polygon(radar);
    let axis_count = radar.axes().len();
    let color = to_color(radar.color);

    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title(TITLE))
        .marker(Marker::Braille)
        .x_bounds([-1.5, 1.5])
        .y_bounds([-1.3, 1.3])
        .paint(move |ctx| {
            draw_spokes(ctx, axis_count);
            if radar.filled {
                fill_polygon(ctx, &vertices, color);
            }
            for edge in vertices.windows(2) {
                ctx.draw(&CanvasLine {
                    x1: edge[0].0,
                    y1: edge[0].1,
                    x2: edge[1].0,
                    y2: edge[1].1,
                    color,
                });
            }
            ctx.layer();
            for (i, point) in radar.axes().iter().enumerate() {
                let (x, y) = spoke(i, axis_count, LABEL_RADIUS);
                // Text runs rightward; pull left-side labels off the polygon.
                let x = if x < -0.1 { x - 0.35 } else { x };
                ctx.print(
                    x,
                    y,
                    Span::styled(
                        format!("{} {}", point.axis, point.value),
                        Style::default().fg(Color::Gray),
                    ),
                );
            }
        });
    frame.render_widget(canvas, area);
}

/// Unit-circle direction of spoke `i` out of `n`, scaled to `radius`.
/// The first spoke points straight up and the rest follow clockwise.
pub fn spoke(i: usize, n: usize, radius: f64) -> (f64, f64) {
    if n == 0 {
        return (0.0, 0.0);
    }
    let angle = FRAC_PI_2 - TAU * i as f64 / n as f64;
    (radius * angle.cos(), radius * angle.sin())
}

/// Canvas coordinates of every radar point, scaled so the largest value
/// touches the outer ring. The closing point repeats the first.
pub fn polygon(radar: &DefensiveRadar) -> Vec<(f64, f64)> {
    let axis_count = radar.axes().len();
    let max = f64::from(radar.max_value().max(1));
    radar
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| spoke(i % axis_count.max(1), axis_count, RADIUS * f64::from(p.value) / max))
        .collect()
}

fn draw_spokes(ctx: &mut Context, axis_count: usize) {
    for i in 0..axis_count {
        let (x, y) = spoke(i, axis_count, RADIUS);
        ctx.draw(&CanvasLine {
            x1: 0.0,
            y1: 0.0,
            x2: x,
            y2: y,
            color: Color::DarkGray,
        });
    }
}

fn fill_polygon(ctx: &mut Context, vertices: &[(f64, f64)], color: Color) {
    for edge in vertices.windows(2) {
        let (ax, ay) = edge[0];
        let (bx, by) = edge[1];
        for step in 0..=FILL_STEPS {
            let t = step as f64 / FILL_STEPS as f64;
            ctx.draw(&CanvasLine {
                x1: 0.0,
                y1: 0.0,
                x2: ax + (bx - ax) * t,
                y2: ay + (by - ay) * t,
                color,
            });
        }
    }
}
