// Message types exchanged between the TUI, the app orchestrator and
// WebSocket clients.

use plstats_core::PlayerViews;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TUI <-> app orchestrator
// ---------------------------------------------------------------------------

/// Commands sent from the TUI to the app orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    /// Switch the dashboard to another player.
    Select(String),
    /// Re-send the bundle for the current player.
    Refresh,
    Quit,
}

/// Updates pushed from the app orchestrator to the TUI.
#[derive(Debug, Clone)]
pub enum UiUpdate {
    /// Picker options, sorted ascending.
    Players(Vec<String>),
    /// A complete bundle for one player. Replaces whatever is on screen
    /// unless its generation is older.
    Views(Box<PlayerViews>),
    /// The requested player does not exist; the current selection stands.
    SelectionRejected { key: String, reason: String },
    /// Number of WebSocket clients currently connected.
    ClientCount(usize),
}

// ---------------------------------------------------------------------------
// WebSocket wire format
// ---------------------------------------------------------------------------

/// Requests a WebSocket client can send, as JSON text frames tagged by
/// `type`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientMessage {
    ListPlayers,
    /// Change this connection's selection.
    Select { player: String },
    /// One-off query that leaves the selection alone.
    GetViewModels { player: String },
    /// Bundle for the connection's current selection.
    Current,
}

/// Responses written back to a WebSocket client.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServerMessage {
    Players { players: Vec<String> },
    Views { views: Box<PlayerViews> },
    EntityNotFound { player: String },
    Error { message: String },
}

impl ServerMessage {
    pub fn to_json(&self) -> String {
        match serde_json::to_string(self) {
            Ok(json) => json,
            // Every variant serializes; keep the connection usable anyway.
            Err(e) => format!(r#"{{"type":"ERROR","message":"serialization failed: {e}"}}"#),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_list_players() {
        let msg: ClientMessage = serde_json::from_str(r#"{"type":"LIST_PLAYERS"}"#).unwrap();
        assert_eq!(msg, ClientMessage::ListPlayers);
    }

    #[test]
    fn parse_select_and_query() {
        let msg: ClientMessage =
            serde_json::from_str(r#"{"type":"SELECT","player":"Harry Kane"}"#).unwrap();
        assert_eq!(
            msg,
            ClientMessage::Select {
                player: "Harry Kane".into()
            }
        );
        let msg: ClientMessage =
            serde_json::from_str(r#"{"type":"GET_VIEW_MODELS","player":"Son Heung-Min"}"#)
                .unwrap();
        assert_eq!(
            msg,
            ClientMessage::GetViewModels {
                player: "Son Heung-Min".into()
            }
        );
        let msg: ClientMessage = serde_json::from_str(r#"{"type":"CURRENT"}"#).unwrap();
        assert_eq!(msg, ClientMessage::Current);
    }

    #[test]
    fn select_without_player_is_rejected() {
        assert!(serde_json::from_str::<ClientMessage>(r#"{"type":"SELECT"}"#).is_err());
    }

    #[test]
    fn unknown_type_is_rejected() {
        assert!(serde_json::from_str::<ClientMessage>(r#"{"type":"DELETE_ALL"}"#).is_err());
    }

    #[test]
    fn server_messages_are_tagged() {
        let json: serde_json::Value = serde_json::from_str(
            &ServerMessage::EntityNotFound {
                player: "Nobody".into(),
            }
            .to_json(),
        )
        .unwrap();
        assert_eq!(json["type"], "ENTITY_NOT_FOUND");
        assert_eq!(json["player"], "Nobody");

        let json: serde_json::Value = serde_json::from_str(
            &ServerMessage::Players {
                players: vec!["A".into(), "B".into()],
            }
            .to_json(),
        )
        .unwrap();
        assert_eq!(json["type"], "PLAYERS");
        assert_eq!(json["players"][1], "B");
    }
}
