//! RDS input bridge — library crate.
//!
//! This library contains everything the `rds-input-bridge` binary does except
//! argument parsing and process setup, organised in three layers:
//!
//! - [`domain`] — configuration types.  No I/O, no async.
//! - [`application`] — the inject-input use case: translate a wire event into
//!   native primitives and post them through an injector trait.  Pure logic
//!   against an abstract boundary, fully unit-testable.
//! - [`infrastructure`] — the WebSocket accept loop, the per-session frame
//!   handler, and the platform injector implementations (real Win32 posting on
//!   Windows, a recording mock everywhere).
//!
//! Splitting the binary into a library like this lets the integration tests
//! drive the real server loop against an ephemeral port and a mock injector.

pub mod application;
pub mod domain;
pub mod infrastructure;
