//! WebSocket server: accept loop and per-session event ingestion.
//!
//! This module is responsible for:
//!
//! 1. Binding a TCP listener on the configured address.
//! 2. Accepting incoming TCP connections from remote viewers.
//! 3. Upgrading each connection to a WebSocket session.
//! 4. Reading JSON event frames from the session and handing each parsed
//!    event to the shared [`InjectInputUseCase`].
//! 5. Gracefully shutting down when the `running` flag is cleared.
//!
//! # One-way protocol
//!
//! Input flows strictly client → bridge.  The server never sends application
//! frames back: no acknowledgements, no error replies.  A client learns about
//! a rejected message only through the bridge's log.  (Protocol-level pongs
//! are handled by tokio-tungstenite when the sink is flushed; this server
//! never writes, so even those are not emitted — the Wine session viewer
//! does not ping.)
//!
//! # Failure isolation
//!
//! Failures are contained at two levels:
//!
//! - A malformed or unprocessable *message* is logged and skipped; the
//!   session keeps reading.
//! - A failed *session* ends its own task; the accept loop and every other
//!   session are untouched.
//!
//! # Ordering
//!
//! Each session is a single task that posts its events sequentially, so
//! events from one client reach the window in the order they were sent.
//! Nothing is promised about interleaving across clients.

use std::net::SocketAddr;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::Duration;

use anyhow::Context;
use futures_util::StreamExt;
use tokio::net::{TcpListener, TcpStream};
use tokio::time::timeout;
use tokio_tungstenite::{
    accept_async,
    tungstenite::{Error as WsError, Message as WsMessage},
};
use tracing::{debug, error, info, warn};

use rds_core::events::RemoteEvent;

use crate::application::inject_service::InjectInputUseCase;
use crate::domain::config::BridgeConfig;

// ── Public API ────────────────────────────────────────────────────────────────

/// Binds the configured listener and serves until `running` is cleared.
///
/// # Errors
///
/// Returns an error if the TCP listener cannot be bound (e.g., the port is
/// already in use or the process lacks permission to bind).
pub async fn run_server(
    config: BridgeConfig,
    service: Arc<InjectInputUseCase>,
    running: Arc<AtomicBool>,
) -> anyhow::Result<()> {
    let listener = TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind input listener on {}", config.listen_addr))?;

    info!("input event server listening on {}", config.listen_addr);

    serve(listener, service, running).await
}

/// Runs the accept loop on an already-bound listener.
///
/// Split out from [`run_server`] so integration tests can bind an ephemeral
/// port themselves and learn its address before serving.
///
/// Each accepted connection is handed off to a dedicated Tokio task so that
/// one slow client never blocks others.  A short timeout on `accept()` lets
/// the loop check the `running` flag periodically even when no clients are
/// connecting.
pub async fn serve(
    listener: TcpListener,
    service: Arc<InjectInputUseCase>,
    running: Arc<AtomicBool>,
) -> anyhow::Result<()> {
    loop {
        if !running.load(Ordering::Relaxed) {
            info!("shutdown flag set; stopping accept loop");
            break;
        }

        let accept_result = timeout(Duration::from_millis(200), listener.accept()).await;

        match accept_result {
            Ok(Ok((stream, peer_addr))) => {
                info!("new input client from {peer_addr}");
                let service = Arc::clone(&service);

                tokio::spawn(async move {
                    handle_client_session(stream, peer_addr, service).await;
                });
            }
            Ok(Err(e)) => {
                // Transient accept error (e.g., too many open file descriptors).
                // Log it and continue rather than crashing the whole server.
                error!("accept error: {e}");
            }
            Err(_) => {
                // Timeout — no new connection in the last 200 ms.
                // Loop back to check the `running` flag.
            }
        }
    }

    Ok(())
}

// ── Per-session handler ───────────────────────────────────────────────────────

/// Top-level handler for a single client session.
///
/// Wraps [`run_session`] and logs the outcome, so the inner function can use
/// `?` for clean error propagation.
async fn handle_client_session(
    raw_stream: TcpStream,
    peer_addr: SocketAddr,
    service: Arc<InjectInputUseCase>,
) {
    match run_session(raw_stream, peer_addr, service).await {
        Ok(()) => info!("session {peer_addr} closed normally"),
        Err(e) => warn!("session {peer_addr} closed with error: {e:#}"),
    }
}

/// Runs the complete lifecycle of one client session: handshake, then a
/// read-translate-post loop until the client disconnects.
///
/// # Errors
///
/// Returns an error only if the WebSocket handshake fails.  After that, every
/// per-message failure is logged and skipped.
async fn run_session(
    raw_stream: TcpStream,
    peer_addr: SocketAddr,
    service: Arc<InjectInputUseCase>,
) -> anyhow::Result<()> {
    // `accept_async` reads the client's HTTP Upgrade request and sends the
    // "101 Switching Protocols" response; afterwards the stream speaks
    // WebSocket frames.
    let mut ws_stream = accept_async(raw_stream)
        .await
        .with_context(|| format!("WebSocket handshake failed with {peer_addr}"))?;

    info!("WebSocket session established: {peer_addr}");

    loop {
        let ws_msg = match ws_stream.next().await {
            Some(Ok(msg)) => msg,
            Some(Err(WsError::ConnectionClosed | WsError::Protocol(_))) => {
                debug!("session {peer_addr}: WebSocket closed normally");
                break;
            }
            Some(Err(e)) => {
                warn!("session {peer_addr}: WebSocket error: {e}");
                break;
            }
            None => {
                debug!("session {peer_addr}: stream ended");
                break;
            }
        };

        match ws_msg {
            WsMessage::Text(json_str) => {
                // Parse the JSON event.  One bad message never closes the
                // session; the client just loses that event.
                let event: RemoteEvent = match serde_json::from_str(&json_str) {
                    Ok(event) => event,
                    Err(e) => {
                        warn!("session {peer_addr}: invalid event JSON: {e}");
                        continue;
                    }
                };

                debug!("session {peer_addr}: event '{}'", event.type_name());

                if let Err(e) = service.handle_event(&event) {
                    warn!("session {peer_addr}: event dropped: {e}");
                    continue;
                }
            }

            WsMessage::Binary(_) => {
                // The protocol is JSON text frames only.
                warn!("session {peer_addr}: unexpected binary frame (ignored)");
            }

            WsMessage::Ping(data) => {
                debug!("session {peer_addr}: WebSocket ping ({} bytes)", data.len());
            }

            WsMessage::Pong(_) => {
                debug!("session {peer_addr}: WebSocket pong received");
            }

            WsMessage::Close(_) => {
                debug!("session {peer_addr}: Close frame received");
                break;
            }

            WsMessage::Frame(_) => {
                debug!("session {peer_addr}: raw frame (ignored)");
            }
        }
    }

    Ok(())
}
