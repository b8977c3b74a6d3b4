//! Bridge configuration.
//!
//! All runtime knobs for the input bridge live in one plain struct, built once
//! at startup from CLI arguments / environment variables (see `main.rs`) and
//! then shared read-only with every session task.

use std::net::SocketAddr;

/// Default WebSocket listen port; remote clients connect to `ws://host:8765`.
pub const DEFAULT_LISTEN_PORT: u16 = 8765;

/// Title of the session window that receives injected input.  The producing
/// session creates exactly one top-level window with this title.
pub const DEFAULT_WINDOW_TITLE: &str = "RemoteDesktop";

/// Runtime configuration for the input bridge.
///
/// Constructed once in `main.rs` from CLI arguments; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Address the WebSocket listener binds to.
    pub listen_addr: SocketAddr,

    /// Title of the target window to resolve at startup.  Resolution happens
    /// once, before the listener starts accepting; a missing window is fatal.
    pub window_title: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            // All interfaces: the remote viewer typically runs on another host.
            listen_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_LISTEN_PORT)),
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_listen_addr_is_all_interfaces_8765() {
        let config = BridgeConfig::default();
        assert_eq!(config.listen_addr.to_string(), "0.0.0.0:8765");
    }

    #[test]
    fn test_default_window_title() {
        let config = BridgeConfig::default();
        assert_eq!(config.window_title, "RemoteDesktop");
    }
}
