// TUI dashboard: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState` that mirrors what the app orchestrator last
// sent. Updates arrive over an mpsc channel; the TUI applies them to
// `ViewState` and re-renders at ~30 fps.

pub mod input;
pub mod layout;
pub mod widgets;

use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::Frame;
use tokio::sync::mpsc;
use tracing::debug;

use plstats_core::views::shots::ShotCategory;
use plstats_core::PlayerViews;

use crate::assets::{resolve_crest, Crest};
use crate::protocol::{UiUpdate, UserCommand};

use layout::build_layout;

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// TUI-local state that mirrors the application state for rendering.
pub struct ViewState {
    /// Every selectable player, sorted.
    pub players: Vec<String>,
    /// The bundle on screen. Always replaced whole, never patched.
    pub views: Option<Box<PlayerViews>>,
    /// Crest lookup for the header, refreshed with each bundle.
    pub crest: Crest,
    pub assets_dir: PathBuf,
    /// Highlighted row within the filtered picker list.
    pub cursor: usize,
    /// Current filter/search text.
    pub filter_text: String,
    /// Whether the filter input is active.
    pub filter_mode: bool,
    /// Last rejection or notice for the status bar.
    pub status_message: Option<String>,
    pub ws_clients: usize,
    /// Focused bar in the Shots panel, counted match by match in legend
    /// order.
    pub shot_focus: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            players: Vec::new(),
            views: None,
            crest: Crest::Unknown,
            assets_dir: PathBuf::from("assets"),
            cursor: 0,
            filter_text: String::new(),
            filter_mode: false,
            status_message: None,
            ws_clients: 0,
            shot_focus: 0,
        }
    }
}

impl ViewState {
    pub fn with_assets_dir(assets_dir: PathBuf) -> Self {
        ViewState {
            assets_dir,
            ..ViewState::default()
        }
    }

    /// Players matching the filter text (case-insensitive substring).
    pub fn filtered_players(&self) -> Vec<&str> {
        let needle = self.filter_text.to_lowercase();
        self.players
            .iter()
            .filter(|p| needle.is_empty() || p.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }

    /// The player under the picker cursor.
    pub fn highlighted(&self) -> Option<&str> {
        self.filtered_players().get(self.cursor).copied()
    }

    pub fn current_key(&self) -> Option<&str> {
        self.views.as_ref().map(|v| v.key.as_str())
    }

    /// Keep the cursor inside the filtered list.
    pub fn clamp_cursor(&mut self) {
        let len = self.filtered_players().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// Step the Shots focus one bar forward or back, wrapping at the ends.
    pub fn shift_shot_focus(&mut self, forward: bool) {
        let bars = self
            .views
            .as_ref()
            .map_or(0, |v| v.shots.matches.len() * ShotCategory::ALL.len());
        if bars == 0 {
            self.shot_focus = 0;
            return;
        }
        self.shot_focus = if forward {
            (self.shot_focus + 1) % bars
        } else {
            (self.shot_focus + bars - 1) % bars
        };
    }

    /// Match index and category under the Shots focus.
    pub fn focused_shot(&self) -> Option<(usize, ShotCategory)> {
        let views = self.views.as_ref()?;
        let per_match = ShotCategory::ALL.len();
        let index = self.shot_focus / per_match;
        if index >= views.shots.matches.len() {
            return None;
        }
        Some((index, ShotCategory::ALL[self.shot_focus % per_match]))
    }

    /// Move the cursor onto `key` if it is visible under the current filter.
    fn focus(&mut self, key: &str) {
        if let Some(pos) = self.filtered_players().iter().position(|p| *p == key) {
            self.cursor = pos;
        }
    }
}

// ---------------------------------------------------------------------------
// UiUpdate processing
// ---------------------------------------------------------------------------

/// Apply a single UiUpdate to the ViewState.
pub fn apply_ui_update(state: &mut ViewState, update: UiUpdate) {
    match update {
        UiUpdate::Players(players) => {
            state.players = players;
            state.clamp_cursor();
            if let Some(key) = state.current_key().map(str::to_string) {
                state.focus(&key);
            }
        }
        UiUpdate::Views(views) => {
            if let Some(shown) = &state.views {
                if views.generation < shown.generation {
                    debug!(
                        "Dropping stale bundle for {} (generation {} < {})",
                        views.key, views.generation, shown.generation
                    );
                    return;
                }
            }
            if state.current_key() != Some(views.key.as_str()) {
                state.shot_focus = 0;
            }
            state.crest = resolve_crest(&state.assets_dir, views.header.team.as_deref());
            state.status_message = None;
            let key = views.key.clone();
            state.views = Some(views);
            state.focus(&key);
        }
        UiUpdate::SelectionRejected { key, reason } => {
            debug!("Selection of {} rejected", key);
            state.status_message = Some(reason);
        }
        UiUpdate::ClientCount(count) => {
            state.ws_clients = count;
        }
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the complete dashboard frame.
pub fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area());

    widgets::header::render(frame, layout.header, state);
    widgets::player_list::render(frame, layout.player_list, state);
    widgets::rating::render(frame, layout.rating, state);
    widgets::shots::render(frame, layout.shots, state);
    widgets::home_away::render(frame, layout.home_away, state);
    widgets::radar::render(frame, layout.radar, state);
    widgets::tree::render(frame, layout.tree, state);
    widgets::grid::render(frame, layout.grid, state);
    widgets::status_bar::render(frame, layout.status_bar, state);
    widgets::status_bar::render_help(frame, layout.help_bar, state);
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop until the user quits or the app side hangs up.
pub async fn run(
    mut ui_rx: mpsc::Receiver<UiUpdate>,
    cmd_tx: mpsc::Sender<UserCommand>,
    assets_dir: PathBuf,
) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    // Restore the terminal before the default hook prints the panic.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    let mut view_state = ViewState::with_assets_dir(assets_dir);
    let mut event_stream = EventStream::new();

    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            update = ui_rx.recv() => {
                match update {
                    Some(ui_update) => apply_ui_update(&mut view_state, ui_update),
                    None => break,
                }
            }

            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        if let Some(cmd) = input::handle_key(key_event, &mut view_state) {
                            let quit = cmd == UserCommand::Quit;
                            if cmd_tx.send(cmd).await.is_err() || quit {
                                break;
                            }
                        }
                    }
                    Some(Ok(_)) => {
                        // Resize is picked up by the next draw.
                    }
                    Some(Err(_)) | None => break,
                }
            }

            _ = render_tick.tick() => {
                terminal.draw(|frame| render_frame(frame, &view_state))?;
            }
        }
    }

    ratatui::restore();
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use plstats_core::{load_index, DataPaths, EntityIndex, PlayerViews};

    pub fn sample_index() -> Arc<EntityIndex> {
        Arc::new(
            load_index(&DataPaths {
                profiles: "data/data_final.csv".into(),
                ratings: "data/rating.csv".into(),
            })
            .expect("sample data should load"),
        )
    }

    pub fn views_for(key: &str, generation: u64) -> Box<PlayerViews> {
        let mut views = plstats_core::get_view_models(&sample_index(), key).unwrap();
        views.generation = generation;
        Box::new(views)
    }

    pub fn state_with(key: &str) -> super::ViewState {
        let mut state = super::ViewState::default();
        state.players = sample_index().player_names().to_vec();
        state.views = Some(views_for(key, 1));
        state
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{sample_index, state_with, views_for};
    use super::*;

    #[test]
    fn view_state_default_is_sensible() {
        let state = ViewState::default();
        assert!(state.players.is_empty());
        assert!(state.views.is_none());
        assert_eq!(state.crest, Crest::Unknown);
        assert_eq!(state.cursor, 0);
        assert!(!state.filter_mode);
        assert!(state.filter_text.is_empty());
        assert!(state.status_message.is_none());
        assert_eq!(state.ws_clients, 0);
    }

    #[test]
    fn players_update_sets_options() {
        let mut state = ViewState::default();
        apply_ui_update(
            &mut state,
            UiUpdate::Players(vec!["A".into(), "B".into(), "C".into()]),
        );
        assert_eq!(state.players.len(), 3);
        assert_eq!(state.highlighted(), Some("A"));
    }

    #[test]
    fn views_update_replaces_bundle_and_focuses_picker() {
        let mut state = ViewState::default();
        apply_ui_update(
            &mut state,
            UiUpdate::Players(sample_index().player_names().to_vec()),
        );
        apply_ui_update(&mut state, UiUpdate::Views(views_for("Harry Kane", 1)));
        assert_eq!(state.current_key(), Some("Harry Kane"));
        assert_eq!(state.highlighted(), Some("Harry Kane"));
        assert!(matches!(state.crest, Crest::Missing(_) | Crest::Found(_)));
    }

    #[test]
    fn shot_focus_walks_bars_and_wraps() {
        let mut state = state_with("Harry Kane");
        assert_eq!(state.focused_shot(), Some((0, ShotCategory::Goals)));
        state.shift_shot_focus(true);
        assert_eq!(state.focused_shot(), Some((0, ShotCategory::ShotsOffTarget)));
        state.shift_shot_focus(true);
        state.shift_shot_focus(true);
        assert_eq!(state.focused_shot(), Some((1, ShotCategory::Goals)));

        state.shot_focus = 0;
        state.shift_shot_focus(false);
        assert_eq!(
            state.focused_shot(),
            Some((2, ShotCategory::ShotsOnTargetBlocked))
        );
        state.shift_shot_focus(true);
        assert_eq!(state.shot_focus, 0);
    }

    #[test]
    fn shot_focus_without_matches_stays_put() {
        let mut state = state_with("Aaron Ramsdale");
        state.shift_shot_focus(true);
        assert_eq!(state.shot_focus, 0);
        assert_eq!(state.focused_shot(), None);
        assert_eq!(ViewState::default().focused_shot(), None);
    }

    #[test]
    fn new_player_resets_shot_focus() {
        let mut state = ViewState::default();
        apply_ui_update(&mut state, UiUpdate::Views(views_for("Harry Kane", 1)));
        state.shift_shot_focus(true);
        apply_ui_update(&mut state, UiUpdate::Views(views_for("Harry Kane", 1)));
        assert_eq!(state.shot_focus, 1);
        apply_ui_update(&mut state, UiUpdate::Views(views_for("Mohamed Salah", 2)));
        assert_eq!(state.shot_focus, 0);
    }

    #[test]
    fn stale_bundle_is_ignored() {
        let mut state = ViewState::default();
        apply_ui_update(&mut state, UiUpdate::Views(views_for("Son Heung-Min", 2)));
        apply_ui_update(&mut state, UiUpdate::Views(views_for("Harry Kane", 1)));
        assert_eq!(state.current_key(), Some("Son Heung-Min"));
    }

    #[test]
    fn same_generation_refresh_is_accepted() {
        let mut state = ViewState::default();
        apply_ui_update(&mut state, UiUpdate::Views(views_for("Harry Kane", 3)));
        apply_ui_update(&mut state, UiUpdate::Views(views_for("Harry Kane", 3)));
        assert_eq!(state.current_key(), Some("Harry Kane"));
    }

    #[test]
    fn rejection_keeps_bundle_and_sets_message() {
        let mut state = state_with("Mohamed Salah");
        apply_ui_update(
            &mut state,
            UiUpdate::SelectionRejected {
                key: "Nobody".into(),
                reason: "no such player: Nobody".into(),
            },
        );
        assert_eq!(state.current_key(), Some("Mohamed Salah"));
        assert_eq!(state.status_message.as_deref(), Some("no such player: Nobody"));

        apply_ui_update(&mut state, UiUpdate::Views(views_for("Harry Kane", 2)));
        assert!(state.status_message.is_none());
    }

    #[test]
    fn client_count_update() {
        let mut state = ViewState::default();
        apply_ui_update(&mut state, UiUpdate::ClientCount(2));
        assert_eq!(state.ws_clients, 2);
    }

    #[test]
    fn filter_narrows_players() {
        let mut state = ViewState::default();
        state.players = vec!["Harry Kane".into(), "Mohamed Salah".into(), "Sadio Mane".into()];
        state.filter_text = "SA".into();
        assert_eq!(state.filtered_players(), vec!["Mohamed Salah", "Sadio Mane"]);
        state.cursor = 5;
        state.clamp_cursor();
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn render_frame_does_not_panic_with_defaults() {
        let backend = ratatui::backend::TestBackend::new(160, 50);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = ViewState::default();
        terminal.draw(|frame| render_frame(frame, &state)).unwrap();
    }

    #[test]
    fn render_frame_does_not_panic_with_views() {
        let backend = ratatui::backend::TestBackend::new(160, 50);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        for key in ["Mohamed Salah", "Aaron Ramsdale"] {
            let state = state_with(key);
            terminal.draw(|frame| render_frame(frame, &state)).unwrap();
        }
    }

    #[test]
    fn render_frame_survives_tiny_terminal() {
        let backend = ratatui::backend::TestBackend::new(20, 8);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = state_with("Mohamed Salah");
        terminal.draw(|frame| render_frame(frame, &state)).unwrap();
    }
}
