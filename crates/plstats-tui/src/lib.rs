// Library root: exposes the dashboard modules so integration tests can drive
// the app loop, the WebSocket sessions and the config loader directly.

pub mod app;
pub mod assets;
pub mod config;
pub mod protocol;
pub mod tui;
pub mod ws_server;
