//! Domain layer: configuration.

pub mod config;

pub use config::BridgeConfig;
