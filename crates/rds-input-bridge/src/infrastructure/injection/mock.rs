//! Recording injector: a test double and the non-Windows stand-in.
//!
//! Records every posted [`WindowMessage`] in arrival order instead of
//! delivering it anywhere.  The integration tests read the recorded sequence
//! back to verify ordering and content; on non-Windows development builds
//! `main.rs` wires this in so the whole server path stays runnable.

use std::sync::Mutex;

use rds_core::inject::WindowMessage;

use crate::application::inject_service::{InjectError, WindowInjector};

/// In-memory injector that records messages instead of posting them.
#[derive(Debug, Default)]
pub struct MockWindowInjector {
    /// Every message posted so far, in global arrival order.
    pub posted: Mutex<Vec<WindowMessage>>,

    /// When `true`, every post fails.  Lets tests exercise the error path.
    pub should_fail: bool,
}

impl MockWindowInjector {
    /// Creates an empty, always-succeeding recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recorder whose every post fails.
    pub fn failing() -> Self {
        Self {
            posted: Mutex::new(Vec::new()),
            should_fail: true,
        }
    }

    /// Returns a snapshot of the recorded messages.
    pub fn recorded(&self) -> Vec<WindowMessage> {
        self.posted.lock().unwrap().clone()
    }
}

impl WindowInjector for MockWindowInjector {
    fn post(&self, message: WindowMessage) -> Result<(), InjectError> {
        if self.should_fail {
            return Err(InjectError::PostFailed(
                "mock injector configured to fail".to_string(),
            ));
        }
        self.posted.lock().unwrap().push(message);
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rds_core::inject::WM_MOUSEMOVE;

    #[test]
    fn test_mock_records_messages_in_order() {
        let injector = MockWindowInjector::new();
        for i in 0..3 {
            injector
                .post(WindowMessage {
                    msg: WM_MOUSEMOVE,
                    wparam: i,
                    lparam: 0,
                })
                .unwrap();
        }
        let recorded = injector.recorded();
        assert_eq!(recorded.len(), 3);
        assert_eq!(recorded[0].wparam, 0);
        assert_eq!(recorded[2].wparam, 2);
    }

    #[test]
    fn test_failing_mock_records_nothing() {
        let injector = MockWindowInjector::failing();
        let result = injector.post(WindowMessage {
            msg: WM_MOUSEMOVE,
            wparam: 0,
            lparam: 0,
        });
        assert!(result.is_err());
        assert!(injector.recorded().is_empty());
    }
}
