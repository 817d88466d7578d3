// Player stats dashboard entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Load config
// 3. Load both CSV datasets into the entity index
// 4. Resolve the default player and build the selection controller
// 5. Create mpsc channels
// 6. Spawn WebSocket server task (when enabled)
// 7. Spawn app logic task
// 8. Run the TUI until the user quits
// 9. Cleanup on exit

use std::path::PathBuf;
use std::sync::Arc;

use plstats_core::{load_index, SelectionController};
use plstats_tui::app;
use plstats_tui::config;
use plstats_tui::tui;
use plstats_tui::ws_server;

use anyhow::Context;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing
    init_tracing()?;
    info!("Player stats dashboard starting up");

    // 2. Load config
    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: profiles={}, ratings={}",
        config.data.profiles,
        config.data.ratings
    );

    // 3. Load datasets
    let index = Arc::new(load_index(&config.data).context("failed to load player datasets")?);
    info!(
        "Indexed {} players and {} matches ({} orphan match rows)",
        index.len(),
        index.match_count(),
        index.orphan_matches()
    );

    // 4. Default selection
    let default_player = if index.contains(&config.selection.default_player) {
        config.selection.default_player.clone()
    } else {
        let fallback = index
            .player_names()
            .first()
            .cloned()
            .context("player dataset has no valid rows")?;
        warn!(
            "Default player {:?} not in dataset, falling back to {:?}",
            config.selection.default_player, fallback
        );
        fallback
    };
    let controller = SelectionController::new(Arc::clone(&index), &default_player)
        .context("failed to select default player")?;

    // 5. Channels
    let (ws_tx, ws_rx) = mpsc::channel(64);
    let (cmd_tx, cmd_rx) = mpsc::channel(64);
    let (ui_tx, ui_rx) = mpsc::channel(256);

    // 6. WebSocket server
    let ws_handle = if config.server.enabled {
        let port = config.server.port;
        let index = Arc::clone(&index);
        let default_player = default_player.clone();
        Some(tokio::spawn(async move {
            if let Err(e) = ws_server::run(port, index, default_player, ws_tx).await {
                error!("WebSocket server error on port {}: {}", port, e);
            }
        }))
    } else {
        info!("WebSocket server disabled");
        drop(ws_tx);
        None
    };

    // 7. App logic
    let app_state = app::AppState::new(controller);
    let app_handle = tokio::spawn(async move {
        if let Err(e) = app::run(ws_rx, cmd_rx, ui_tx, app_state).await {
            error!("Application loop error: {}", e);
        }
    });

    // 8. TUI (blocks until the user presses 'q' or Ctrl+C)
    info!("Application ready, showing {}", default_player);
    if let Err(e) = tui::run(ui_rx, cmd_tx, PathBuf::from(&config.assets.dir)).await {
        error!("TUI error: {}", e);
    }

    // 9. Cleanup: the app loop exits once the command channel closes
    let _ = tokio::time::timeout(std::time::Duration::from_secs(5), async {
        let _ = app_handle.await;
    })
    .await;

    if let Some(handle) = ws_handle {
        handle.abort();
    }

    info!("Player stats dashboard shut down cleanly");
    Ok(())
}

/// Initialize tracing to log to a file (not the terminal, which is used by the TUI).
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("plstats.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("plstats_tui=info,plstats_core=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
