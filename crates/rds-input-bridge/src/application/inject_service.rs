//! The inject-input use case: wire event in, posted window messages out.
//!
//! This module owns the per-event pipeline that every WebSocket session runs:
//!
//! 1. Translate the parsed [`RemoteEvent`] into its ordered sequence of native
//!    primitives (`rds_core::inject::translate` — pure, all-or-nothing).
//! 2. Pack each primitive into a `PostMessage` triple.
//! 3. Post the triples to the target window, in order, through the
//!    [`WindowInjector`] trait.
//!
//! The trait is the seam between this platform-neutral logic and the Win32
//! calls in the infrastructure layer.  Tests substitute a recording injector
//! and assert on the exact message sequence; `main.rs` wires in the real
//! `PostMessageW`-backed implementation on Windows.
//!
//! # Failure isolation
//!
//! A failed event returns a [`ServiceError`] and posts nothing further, but it
//! never touches the connection: the session loop logs the error and keeps
//! reading.  Translation errors happen before any primitive is posted, so a
//! bad key event cannot leave a key stuck down.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use rds_core::events::RemoteEvent;
use rds_core::inject::{translate, NativeInputPrimitive, TranslateError, WindowMessage};

// ── Injector boundary ─────────────────────────────────────────────────────────

/// Error returned by a [`WindowInjector`] when a post fails.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InjectError {
    /// The platform call that delivers the message failed.
    #[error("failed to post message to target window: {0}")]
    PostFailed(String),
}

/// Posts fully packed window messages to the resolved target window.
///
/// Implementations are fire-and-forget: a successful return means the message
/// was queued for the window, not that the window processed it.  There is no
/// acknowledgement in either direction.
///
/// `Send + Sync` because one injector instance is shared across all session
/// tasks via `Arc`.
pub trait WindowInjector: Send + Sync {
    /// Queues one message for the target window.
    ///
    /// # Errors
    ///
    /// Returns [`InjectError::PostFailed`] if the underlying post call fails
    /// (e.g., the target window has been destroyed).
    fn post(&self, message: WindowMessage) -> Result<(), InjectError>;
}

// ── Use case ──────────────────────────────────────────────────────────────────

/// Errors produced while handling one wire event.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The event could not be translated into native primitives.
    #[error(transparent)]
    Translate(#[from] TranslateError),

    /// A primitive could not be posted to the target window.
    #[error(transparent)]
    Inject(#[from] InjectError),
}

/// Handles one parsed wire event end to end: translate, pack, post.
///
/// One instance is created at startup and shared by every session task.
/// Ordering within a session is guaranteed by the session loop itself — each
/// session posts its own events sequentially; no ordering is promised across
/// sessions.
pub struct InjectInputUseCase {
    injector: Arc<dyn WindowInjector>,
}

impl InjectInputUseCase {
    /// Creates the use case around the platform injector chosen in `main.rs`.
    pub fn new(injector: Arc<dyn WindowInjector>) -> Self {
        Self { injector }
    }

    /// Translates `event` and posts every resulting message, in order.
    ///
    /// Events that translate to an empty sequence (reserved mouse actions) are
    /// a successful no-op.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::Translate`] if the event is unmappable; nothing has
    ///   been posted in that case.
    /// - [`ServiceError::Inject`] if a post fails part-way; earlier messages
    ///   of the same event have already been queued and are not recalled.
    pub fn handle_event(&self, event: &RemoteEvent) -> Result<(), ServiceError> {
        let primitives = translate(event)?;

        if primitives.is_empty() {
            debug!("event type '{}' produced no input; skipping", event.type_name());
            return Ok(());
        }

        for primitive in primitives {
            self.injector
                .post(NativeInputPrimitive::to_window_message(primitive))?;
        }

        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use rds_core::inject::{
        make_lparam, MK_LBUTTON, WM_CHAR, WM_KEYDOWN, WM_KEYUP, WM_LBUTTONDOWN, WM_LBUTTONUP,
        WM_MOUSEMOVE,
    };

    /// Test double that records every posted message in order and can be told
    /// to start failing after a given number of successful posts.
    struct RecordingInjector {
        posted: Mutex<Vec<WindowMessage>>,
        fail_after: Option<usize>,
    }

    impl RecordingInjector {
        fn new() -> Self {
            Self {
                posted: Mutex::new(Vec::new()),
                fail_after: None,
            }
        }

        fn failing_after(n: usize) -> Self {
            Self {
                posted: Mutex::new(Vec::new()),
                fail_after: Some(n),
            }
        }

        fn posted(&self) -> Vec<WindowMessage> {
            self.posted.lock().unwrap().clone()
        }
    }

    impl WindowInjector for RecordingInjector {
        fn post(&self, message: WindowMessage) -> Result<(), InjectError> {
            let mut posted = self.posted.lock().unwrap();
            if let Some(limit) = self.fail_after {
                if posted.len() >= limit {
                    return Err(InjectError::PostFailed("window destroyed".to_string()));
                }
            }
            posted.push(message);
            Ok(())
        }
    }

    fn use_case_with(injector: Arc<RecordingInjector>) -> InjectInputUseCase {
        InjectInputUseCase::new(injector)
    }

    #[test]
    fn test_click_posts_move_down_up_in_order() {
        // Arrange
        let injector = Arc::new(RecordingInjector::new());
        let service = use_case_with(Arc::clone(&injector));
        let event = RemoteEvent::Mouse {
            x: 100,
            y: 200,
            action: "click".to_string(),
        };

        // Act
        service.handle_event(&event).unwrap();

        // Assert: the exact three messages, same packed coordinates on all
        let lparam = make_lparam(100, 200);
        assert_eq!(
            injector.posted(),
            vec![
                WindowMessage { msg: WM_MOUSEMOVE, wparam: 0, lparam },
                WindowMessage { msg: WM_LBUTTONDOWN, wparam: MK_LBUTTON, lparam },
                WindowMessage { msg: WM_LBUTTONUP, wparam: 0, lparam },
            ]
        );
    }

    #[test]
    fn test_key_posts_keydown_char_keyup() {
        let injector = Arc::new(RecordingInjector::new());
        let service = use_case_with(Arc::clone(&injector));

        service
            .handle_event(&RemoteEvent::Key { character: 'a' })
            .unwrap();

        assert_eq!(
            injector.posted(),
            vec![
                WindowMessage { msg: WM_KEYDOWN, wparam: 0x41, lparam: 0 },
                WindowMessage { msg: WM_CHAR, wparam: 97, lparam: 0 },
                WindowMessage { msg: WM_KEYUP, wparam: 0x41, lparam: 0 },
            ]
        );
    }

    #[test]
    fn test_reserved_mouse_action_posts_nothing_and_succeeds() {
        let injector = Arc::new(RecordingInjector::new());
        let service = use_case_with(Arc::clone(&injector));
        let event = RemoteEvent::Mouse {
            x: 1,
            y: 2,
            action: "drag".to_string(),
        };

        let result = service.handle_event(&event);

        assert!(result.is_ok());
        assert!(injector.posted().is_empty());
    }

    #[test]
    fn test_unmappable_character_posts_nothing() {
        // The all-or-nothing rule: translation fails before any post happens.
        let injector = Arc::new(RecordingInjector::new());
        let service = use_case_with(Arc::clone(&injector));

        let result = service.handle_event(&RemoteEvent::Key { character: '€' });

        assert_eq!(
            result,
            Err(ServiceError::Translate(TranslateError::UnmappableCharacter(
                '€'
            )))
        );
        assert!(injector.posted().is_empty());
    }

    #[test]
    fn test_post_failure_surfaces_as_inject_error() {
        // Fail on the second post of the click triple.
        let injector = Arc::new(RecordingInjector::failing_after(1));
        let service = use_case_with(Arc::clone(&injector));
        let event = RemoteEvent::Mouse {
            x: 1,
            y: 1,
            action: "click".to_string(),
        };

        let result = service.handle_event(&event);

        assert!(matches!(result, Err(ServiceError::Inject(_))));
        // The move before the failure was queued; no recall.
        assert_eq!(injector.posted().len(), 1);
    }

    #[test]
    fn test_events_post_sequentially_in_call_order() {
        let injector = Arc::new(RecordingInjector::new());
        let service = use_case_with(Arc::clone(&injector));

        service
            .handle_event(&RemoteEvent::Mouse {
                x: 1,
                y: 1,
                action: "click".to_string(),
            })
            .unwrap();
        service
            .handle_event(&RemoteEvent::Key { character: 'z' })
            .unwrap();

        let posted = injector.posted();
        assert_eq!(posted.len(), 6);
        assert_eq!(posted[0].msg, WM_MOUSEMOVE);
        assert_eq!(posted[2].msg, WM_LBUTTONUP);
        assert_eq!(posted[3].msg, WM_KEYDOWN);
        assert_eq!(posted[5].msg, WM_KEYUP);
    }
}
