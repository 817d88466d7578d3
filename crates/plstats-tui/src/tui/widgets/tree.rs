// Proportion tree widget: slice-and-dice treemap of the defensive metrics.
//
// Leaves fill two rows in axis order. Row heights follow the row totals and
// cell widths follow the leaf values. Zero-valued leaves collapse to nothing
// unless every leaf is zero, in which case all cells get equal space.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use plstats_core::views::tree::{ProportionTree, TreeLeaf};

use super::{render_placeholder, to_color};
use crate::tui::ViewState;

const TITLE: &str = "Defensive share";

/// Leaves per treemap row.
const ROW_LEN: usize = 3;

/// Layout weights are u16; leaf values are rescaled onto this range.
const WEIGHT_SCALE: u64 = 1000;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let Some(views) = &state.views else {
        render_placeholder(frame, area, TITLE, "No player selected");
        return;
    };
    let tree = &views.tree;

    let block = Block::default().borders(Borders::ALL).title(TITLE);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 || tree.leaves.is_empty() {
        return;
    }

    let rows: Vec<&[TreeLeaf]> = tree.leaves.chunks(ROW_LEN).collect();
    let row_totals: Vec<u64> = rows
        .iter()
        .map(|row| row.iter().map(|l| u64::from(l.value)).sum())
        .collect();

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(fill_constraints(&row_totals))
        .split(inner);

    for (row, row_area) in rows.iter().zip(row_areas.iter()) {
        let values: Vec<u64> = row.iter().map(|l| u64::from(l.value)).collect();
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(fill_constraints(&values))
            .split(*row_area);
        for (leaf, cell) in row.iter().zip(cells.iter()) {
            render_leaf(frame, *cell, leaf, tree);
        }
    }
}

fn render_leaf(frame: &mut Frame, area: Rect, leaf: &TreeLeaf, tree: &ProportionTree) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let style = Style::default().fg(Color::White).bg(to_color(leaf.color));
    let text = vec![
        Line::from(Span::styled(
            leaf.name,
            style.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(leaf_caption(leaf, tree), style)),
    ];
    frame.render_widget(
        Paragraph::new(text).style(style).wrap(Wrap { trim: true }),
        area,
    );
}

/// "17 (26%)"; zero-sum trees show the bare count.
pub fn leaf_caption(leaf: &TreeLeaf, tree: &ProportionTree) -> String {
    if tree.is_zero_sum() {
        return leaf.value.to_string();
    }
    let share = f64::from(leaf.value) / tree.total() as f64 * 100.0;
    format!("{} ({:.0}%)", leaf.value, share)
}

/// Proportional `Fill` weights for `values`, or equal weights when they sum
/// to zero.
pub fn fill_constraints(values: &[u64]) -> Vec<Constraint> {
    weights(values).into_iter().map(Constraint::Fill).collect()
}

fn weights(values: &[u64]) -> Vec<u16> {
    let total: u64 = values.iter().sum();
    if total == 0 {
        return vec![1; values.len()];
    }
    values
        .iter()
        .map(|&v| (v * WEIGHT_SCALE / total) as u16)
        .collect()
}
