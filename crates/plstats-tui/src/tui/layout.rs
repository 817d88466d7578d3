// Screen layout: panel arrangement and sizing.
//
// +--------------------------------------------------------------+
// | Header: name, age, club (3 rows)                              |
// +-------------+------------------------------------------------+
// | Players     | Rating trend            | Shot breakdown       |
// | (28 cols)   +-------------------------+----------------------+
// |             | Home/Away | Radar        | Proportion tree      |
// |             +------------------------------------------------+
// |             | Stat grid (4 x 3)                               |
// +-------------+------------------------------------------------+
// | Status bar (1 row)                                            |
// | Help bar (1 row)                                              |
// +--------------------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for each dashboard zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    pub header: Rect,
    /// Left column: filterable player picker.
    pub player_list: Rect,
    pub rating: Rect,
    pub shots: Rect,
    pub home_away: Rect,
    pub radar: Rect,
    pub tree: Rect,
    pub grid: Rect,
    pub status_bar: Rect,
    pub help_bar: Rect,
}

/// Width of the player picker column.
pub const PICKER_WIDTH: u16 = 28;

/// Height of the stat grid: four rows of two lines plus borders.
pub const GRID_HEIGHT: u16 = 10;

pub fn build_layout(area: Rect) -> AppLayout {
    // Vertical: header(3) | body(fill) | status(1) | help(1)
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let header = vertical[0];
    let body = vertical[1];
    let status_bar = vertical[2];
    let help_bar = vertical[3];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(PICKER_WIDTH), Constraint::Min(20)])
        .split(body);

    let player_list = columns[0];
    let charts = columns[1];

    // Charts vertical: history row | profile row | stat grid
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Length(GRID_HEIGHT),
        ])
        .split(charts);

    let history = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Fill(1), Constraint::Fill(1)])
        .split(rows[0]);

    let profile = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(6),
            Constraint::Fill(7),
            Constraint::Fill(7),
        ])
        .split(rows[1]);

    AppLayout {
        header,
        player_list,
        rating: history[0],
        shots: history[1],
        home_away: profile[0],
        radar: profile[1],
        tree: profile[2],
        grid: rows[2],
        status_bar,
        help_bar,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
