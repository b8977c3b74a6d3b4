//! Infrastructure layer: WebSocket server and platform injectors.

pub mod injection;
pub mod ws_server;

pub use ws_server::{run_server, serve};
