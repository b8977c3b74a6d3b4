//! Win32 injector: resolve the session window once, then post messages to it.
//!
//! The producing session owns exactly one top-level window; it is resolved by
//! title with `FindWindowW` once at startup (before the listener accepts any
//! connection) and never re-resolved.  If the window is missing, startup
//! fails — serving input with nowhere to deliver it would only hide the
//! deployment problem.
//!
//! Delivery uses `PostMessageW`, which queues the message on the window's own
//! message loop and returns immediately.  That makes injection fire-and-forget
//! and keeps session tasks from ever blocking on the target application.

#![cfg(target_os = "windows")]

use thiserror::Error;
use windows::core::{HSTRING, PCWSTR};
use windows::Win32::Foundation::{HWND, LPARAM, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{FindWindowW, PostMessageW};

use rds_core::inject::WindowMessage;

use crate::application::inject_service::{InjectError, WindowInjector};

// ── Window resolution ─────────────────────────────────────────────────────────

/// Errors from target window resolution at startup.
#[derive(Debug, Error)]
pub enum WindowError {
    /// No top-level window with the configured title exists.
    #[error("no window titled {0:?} found; is the session running?")]
    NotFound(String),
}

/// A resolved top-level window, held as its raw `HWND` value.
///
/// `HWND` itself is a raw pointer and therefore not `Send`; storing the
/// integer value keeps the handle shareable across session tasks.  Win32
/// window handles are process-global tokens, not dereferenced pointers, so
/// the round-trip through `isize` is lossless.
#[derive(Debug, Clone, Copy)]
pub struct TargetWindow(isize);

impl TargetWindow {
    /// The raw handle value, for log messages.
    pub fn raw(self) -> isize {
        self.0
    }

    fn hwnd(self) -> HWND {
        HWND(self.0 as *mut core::ffi::c_void)
    }
}

/// Resolves the session window by exact title match.
///
/// # Errors
///
/// Returns [`WindowError::NotFound`] when no window with that title exists.
pub fn find_target_window(title: &str) -> Result<TargetWindow, WindowError> {
    let title_w = HSTRING::from(title);

    // Class name is null: match on title alone, any window class.
    let hwnd = unsafe { FindWindowW(PCWSTR::null(), &title_w) }
        .map_err(|_| WindowError::NotFound(title.to_string()))?;

    if hwnd.0.is_null() {
        return Err(WindowError::NotFound(title.to_string()));
    }

    Ok(TargetWindow(hwnd.0 as isize))
}

// ── Posting injector ──────────────────────────────────────────────────────────

/// [`WindowInjector`] that delivers messages with `PostMessageW`.
pub struct PostingInjector {
    window: TargetWindow,
}

impl PostingInjector {
    /// Wraps a resolved target window.
    pub fn new(window: TargetWindow) -> Self {
        Self { window }
    }
}

impl WindowInjector for PostingInjector {
    fn post(&self, message: WindowMessage) -> Result<(), InjectError> {
        // SAFETY: the handle came from FindWindowW; PostMessageW validates it
        // and fails cleanly if the window has since been destroyed.
        unsafe {
            PostMessageW(
                self.window.hwnd(),
                message.msg,
                WPARAM(message.wparam),
                LPARAM(message.lparam),
            )
        }
        .map_err(|e| InjectError::PostFailed(e.to_string()))
    }
}
