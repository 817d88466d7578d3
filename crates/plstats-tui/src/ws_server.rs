// WebSocket server exposing the view-model bundles to external consumers.
//
// Every connection gets its own selection controller over the shared index.
// Requests on a connection are answered strictly in order: a response is
// written before the next frame is read.

use std::sync::Arc;

use futures_util::{Sink, SinkExt, Stream, StreamExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::{self, Message};
use tracing::{debug, info, warn};

use plstats_core::{get_view_models, EntityIndex, EntityNotFound, SelectionController};

use crate::protocol::{ClientMessage, ServerMessage};

/// Connection lifecycle events reported to the app orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WsEvent {
    Connected { addr: String },
    Disconnected { addr: String },
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Per-connection state.
pub struct Session {
    controller: SelectionController,
}

impl Session {
    pub fn new(index: Arc<EntityIndex>, default_player: &str) -> Result<Self, EntityNotFound> {
        Ok(Session {
            controller: SelectionController::new(index, default_player)?,
        })
    }

    pub fn current(&self) -> &str {
        self.controller.current()
    }

    /// Bundle for the session's current selection.
    pub fn current_views(&self) -> ServerMessage {
        match self.controller.refresh() {
            Ok(views) => ServerMessage::Views {
                views: Box::new(views),
            },
            Err(EntityNotFound(player)) => ServerMessage::EntityNotFound { player },
        }
    }

    /// Answer one raw text frame. Unparseable input yields `ERROR`; it never
    /// closes the connection.
    pub fn handle_text(&mut self, text: &str) -> ServerMessage {
        match serde_json::from_str::<ClientMessage>(text) {
            Ok(msg) => self.handle_client_message(msg),
            Err(e) => {
                warn!("Invalid client message: {}", e);
                ServerMessage::Error {
                    message: format!("invalid request: {e}"),
                }
            }
        }
    }

    pub fn handle_client_message(&mut self, msg: ClientMessage) -> ServerMessage {
        match msg {
            ClientMessage::ListPlayers => ServerMessage::Players {
                players: self.controller.index().player_names().to_vec(),
            },
            ClientMessage::Select { player } => match self.controller.select(&player) {
                Ok(views) => ServerMessage::Views {
                    views: Box::new(views),
                },
                Err(EntityNotFound(player)) => ServerMessage::EntityNotFound { player },
            },
            ClientMessage::GetViewModels { player } => {
                match get_view_models(self.controller.index(), &player) {
                    Ok(views) => ServerMessage::Views {
                        views: Box::new(views),
                    },
                    Err(EntityNotFound(player)) => ServerMessage::EntityNotFound { player },
                }
            }
            ClientMessage::Current => self.current_views(),
        }
    }
}

// ---------------------------------------------------------------------------
// Server loop
// ---------------------------------------------------------------------------

/// Accept connections on `127.0.0.1:{port}` forever, one task per client.
pub async fn run(
    port: u16,
    index: Arc<EntityIndex>,
    default_player: String,
    events: mpsc::Sender<WsEvent>,
) -> anyhow::Result<()> {
    let listener = TcpListener::bind(format!("127.0.0.1:{port}")).await?;
    info!("WebSocket server listening on {}", listener.local_addr()?);

    loop {
        let (stream, addr) = listener.accept().await?;
        let addr = addr.to_string();
        debug!("Accepted TCP connection from {addr}");

        let session = match Session::new(Arc::clone(&index), &default_player) {
            Ok(session) => session,
            Err(e) => {
                warn!("Cannot open session for {addr}: {e}");
                continue;
            }
        };
        let events = events.clone();

        tokio::spawn(async move {
            let ws_stream = match tokio_tungstenite::accept_async(stream).await {
                Ok(ws) => ws,
                Err(e) => {
                    warn!("WebSocket handshake failed for {addr}: {e}");
                    return;
                }
            };
            let _ = events.send(WsEvent::Connected { addr: addr.clone() }).await;

            let (write, read) = ws_stream.split();
            if let Err(e) = serve_session(read, write, session, &addr).await {
                warn!("WebSocket session {addr} ended with error: {e}");
            }

            let _ = events.send(WsEvent::Disconnected { addr }).await;
        });
    }
}

/// Drive one session: greet with the default bundle, then answer each text
/// frame in order until the client closes or the stream fails.
///
/// Generic over the stream and sink so it can be tested with in-memory
/// message lists instead of sockets.
pub async fn serve_session<St, Si>(
    mut read: St,
    mut write: Si,
    mut session: Session,
    addr: &str,
) -> anyhow::Result<()>
where
    St: Stream<Item = Result<Message, tungstenite::Error>> + Unpin,
    Si: Sink<Message> + Unpin,
    Si::Error: std::error::Error + Send + Sync + 'static,
{
    write
        .send(Message::Text(session.current_views().to_json().into()))
        .await?;

    while let Some(msg_result) = read.next().await {
        match msg_result {
            Ok(Message::Text(text)) => {
                let reply = session.handle_text(text.as_str());
                write.send(Message::Text(reply.to_json().into())).await?;
            }
            Ok(Message::Close(_)) => {
                info!("Client {addr} sent close frame");
                break;
            }
            Err(e) => {
                warn!("WebSocket error from {addr}: {e}");
                break;
            }
            _ => {
                // Binary, Ping, Pong and raw frames carry no requests.
            }
        }
    }
    debug!("Session {addr} finished on {}", session.current());
    Ok(())
}
