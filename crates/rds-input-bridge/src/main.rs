//! RDS input bridge — entry point.
//!
//! This binary lets remote viewers drive a headless Wine desktop session.  It
//! accepts WebSocket connections, reads JSON-encoded input events, and posts
//! the equivalent Win32 messages to the session's top-level window.
//!
//! # Why window messages instead of system-wide input?
//!
//! The session runs headless: there is no interactive desktop to send global
//! input to, and the bridge must never depend on focus.  Posting directly to
//! the resolved window's message queue reaches the application exactly the
//! way real user input would, regardless of what else runs on the host.
//!
//! # Usage
//!
//! ```text
//! rds-input-bridge [OPTIONS]
//!
//! Options:
//!   --bind         <ADDR>   IP address to bind [default: 0.0.0.0]
//!   --listen-port  <PORT>   WebSocket listener port [default: 8765]
//!   --window-title <TITLE>  Title of the target session window
//!                           [default: RemoteDesktop]
//! ```
//!
//! # Environment variable overrides
//!
//! CLI args take precedence when both are present.
//!
//! | Variable           | Default         | Description              |
//! |--------------------|-----------------|--------------------------|
//! | `RDS_WS_BIND`      | `0.0.0.0`       | Listener bind address    |
//! | `RDS_WS_PORT`      | `8765`          | Listener port            |
//! | `RDS_WINDOW_TITLE` | `RemoteDesktop` | Target window title      |
//!
//! # Architecture overview
//!
//! ```text
//! Remote viewer  (JSON over WebSocket)
//!       ↓
//! rds-input-bridge  ← this process
//!   domain/          BridgeConfig
//!   application/     translate event → post messages (WindowInjector seam)
//!   infrastructure/
//!     ws_server/     accept loop + per-session ingestion
//!     injection/     FindWindowW + PostMessageW (Windows), recorder elsewhere
//!       ↓
//! session window message queue  (WM_MOUSEMOVE, WM_KEYDOWN, ...)
//! ```

use std::net::SocketAddr;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rds_input_bridge::application::{InjectInputUseCase, WindowInjector};
use rds_input_bridge::domain::config::{DEFAULT_LISTEN_PORT, DEFAULT_WINDOW_TITLE};
use rds_input_bridge::domain::BridgeConfig;
use rds_input_bridge::infrastructure::run_server;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// RDS input bridge.
///
/// Accepts WebSocket input events from remote viewers and injects them into
/// the target session window as Win32 messages.
#[derive(Debug, Parser)]
#[command(
    name = "rds-input-bridge",
    about = "WebSocket-to-Win32 input injection bridge for headless Wine sessions",
    version
)]
struct Cli {
    /// IP address to bind the WebSocket server to.
    ///
    /// Use `0.0.0.0` to accept connections from any interface, or `127.0.0.1`
    /// to accept only local connections (e.g., behind a reverse proxy).
    #[arg(long, default_value = "0.0.0.0", env = "RDS_WS_BIND")]
    bind: String,

    /// TCP port for the WebSocket server to listen on.
    #[arg(long, default_value_t = DEFAULT_LISTEN_PORT, env = "RDS_WS_PORT")]
    listen_port: u16,

    /// Title of the session window that receives injected input.
    ///
    /// Resolved exactly once at startup; the bridge refuses to start when no
    /// window with this title exists.
    #[arg(long, default_value = DEFAULT_WINDOW_TITLE, env = "RDS_WINDOW_TITLE")]
    window_title: String,
}

impl Cli {
    /// Converts the parsed CLI arguments into a [`BridgeConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if `--bind` is not a valid IP address.
    fn into_bridge_config(self) -> anyhow::Result<BridgeConfig> {
        let listen_addr: SocketAddr = format!("{}:{}", self.bind, self.listen_port)
            .parse()
            .with_context(|| {
                format!("invalid bind address: '{}:{}'", self.bind, self.listen_port)
            })?;

        Ok(BridgeConfig {
            listen_addr,
            window_title: self.window_title,
        })
    }
}

// ── Injector selection ────────────────────────────────────────────────────────

/// Resolves the target window and builds the real Win32 injector.
///
/// Runs before the listener binds: a missing window is a deployment problem
/// the operator must see immediately, not after clients start connecting.
#[cfg(target_os = "windows")]
fn build_injector(config: &BridgeConfig) -> anyhow::Result<Arc<dyn WindowInjector>> {
    use rds_input_bridge::infrastructure::injection::windows::{
        find_target_window, PostingInjector,
    };

    let window = find_target_window(&config.window_title)
        .with_context(|| format!("cannot resolve target window {:?}", config.window_title))?;

    info!(
        "target window {:?} resolved (hwnd={:#x})",
        config.window_title,
        window.raw()
    );

    Ok(Arc::new(PostingInjector::new(window)))
}

/// Non-Windows builds have no window system to inject into; input is recorded
/// in memory so the server path stays exercisable during development.
#[cfg(not(target_os = "windows"))]
fn build_injector(config: &BridgeConfig) -> anyhow::Result<Arc<dyn WindowInjector>> {
    use rds_input_bridge::infrastructure::injection::mock::MockWindowInjector;

    tracing::warn!(
        "no Win32 window system on this target; recording input for {:?} instead of posting",
        config.window_title
    );

    Ok(Arc::new(MockWindowInjector::new()))
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Log level comes from `RUST_LOG`; default to `info` when unset.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.into_bridge_config()?;

    info!(
        "RDS input bridge starting — listen={}, window={:?}",
        config.listen_addr, config.window_title
    );

    // Resolve-then-serve: the injector (and on Windows, the target window)
    // must exist before we accept a single connection.
    let injector = build_injector(&config)?;
    let service = Arc::new(InjectInputUseCase::new(injector));

    // Graceful shutdown: Ctrl+C clears the flag, the accept loop checks it
    // every 200 ms and exits cleanly.
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = Arc::clone(&running);

    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("received Ctrl+C — initiating graceful shutdown");
                running_clone.store(false, Ordering::Relaxed);
            }
            Err(e) => {
                tracing::error!("failed to listen for Ctrl+C signal: {e}");
            }
        }
    });

    run_server(config, service, running).await?;

    info!("RDS input bridge stopped");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
