//! Platform injector implementations.
//!
//! - [`windows`] — resolves the target window with `FindWindowW` and posts
//!   messages with `PostMessageW`.  Compiled only on Windows.
//! - [`mock`] — records posted messages in memory.  Compiled everywhere; used
//!   by the integration tests and as the stand-in injector on non-Windows
//!   builds (see `main.rs`).

#[cfg(target_os = "windows")]
pub mod windows;

pub mod mock;
