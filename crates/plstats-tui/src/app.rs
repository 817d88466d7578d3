// Application state and orchestration logic.
//
// The central event loop that owns the terminal session's selection
// controller. Commands from the TUI are handled one at a time, each to
// completion, so the TUI always receives whole bundles in selection order.
// WebSocket connection events are folded in to keep the client count current.

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use plstats_core::SelectionController;

use crate::protocol::{UiUpdate, UserCommand};
use crate::ws_server::WsEvent;

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub controller: SelectionController,
    /// Live WebSocket sessions, as reported by the server task.
    pub ws_clients: usize,
}

impl AppState {
    pub fn new(controller: SelectionController) -> Self {
        AppState {
            controller,
            ws_clients: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Event loop
// ---------------------------------------------------------------------------

/// Run the orchestrator until the TUI quits or its command channel closes.
///
/// The picker options and the default player's bundle are pushed first so the
/// dashboard has something to draw before any input arrives.
pub async fn run(
    mut ws_rx: mpsc::Receiver<WsEvent>,
    mut cmd_rx: mpsc::Receiver<UserCommand>,
    ui_tx: mpsc::Sender<UiUpdate>,
    mut state: AppState,
) -> anyhow::Result<()> {
    info!("Application event loop started");

    let players = state.controller.index().player_names().to_vec();
    let initial = state.controller.refresh()?;
    if ui_tx.send(UiUpdate::Players(players)).await.is_err()
        || ui_tx.send(UiUpdate::Views(Box::new(initial))).await.is_err()
    {
        info!("UI channel closed before startup finished");
        return Ok(());
    }

    // When the server is disabled (or its task ends) the sender is dropped;
    // stop polling the closed channel so select! does not spin on it.
    let mut ws_open = true;

    loop {
        tokio::select! {
            ws_event = ws_rx.recv(), if ws_open => {
                match ws_event {
                    Some(event) => {
                        if !handle_ws_event(&mut state, event, &ui_tx).await {
                            break;
                        }
                    }
                    None => {
                        debug!("WebSocket event channel closed");
                        ws_open = false;
                    }
                }
            }

            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(UserCommand::Quit) => {
                        info!("Quit command received, shutting down");
                        break;
                    }
                    Some(cmd) => {
                        if !handle_command(&mut state, cmd, &ui_tx).await {
                            break;
                        }
                    }
                    None => {
                        info!("Command channel closed, shutting down");
                        break;
                    }
                }
            }
        }
    }

    Ok(())
}

/// Apply one user command. Returns `false` once the UI has gone away.
pub async fn handle_command(
    state: &mut AppState,
    cmd: UserCommand,
    ui_tx: &mpsc::Sender<UiUpdate>,
) -> bool {
    let update = match cmd {
        UserCommand::Select(key) => match state.controller.select(&key) {
            Ok(views) => UiUpdate::Views(Box::new(views)),
            Err(e) => {
                warn!("Selection rejected: {}", e);
                UiUpdate::SelectionRejected {
                    key,
                    reason: e.to_string(),
                }
            }
        },
        UserCommand::Refresh => match state.controller.refresh() {
            Ok(views) => UiUpdate::Views(Box::new(views)),
            Err(e) => UiUpdate::SelectionRejected {
                key: state.controller.current().to_string(),
                reason: e.to_string(),
            },
        },
        UserCommand::Quit => return false,
    };
    ui_tx.send(update).await.is_ok()
}

async fn handle_ws_event(
    state: &mut AppState,
    event: WsEvent,
    ui_tx: &mpsc::Sender<UiUpdate>,
) -> bool {
    match event {
        WsEvent::Connected { addr } => {
            state.ws_clients += 1;
            info!("WebSocket client {} connected ({} live)", addr, state.ws_clients);
        }
        WsEvent::Disconnected { addr } => {
            state.ws_clients = state.ws_clients.saturating_sub(1);
            info!("WebSocket client {} disconnected ({} live)", addr, state.ws_clients);
        }
    }
    ui_tx
        .send(UiUpdate::ClientCount(state.ws_clients))
        .await
        .is_ok()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
