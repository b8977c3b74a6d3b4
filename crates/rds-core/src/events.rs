//! JSON wire format for remote input events.
//!
//! Remote clients send one JSON object per logical input event over their
//! WebSocket connection.  Every message carries a `"type"` field that selects
//! the variant; all other fields are flattened into the same object:
//!
//! ```json
//! {"type":"mouse","x":100,"y":200,"action":"click"}
//! {"type":"key","char":"a"}
//! ```
//!
//! Serde's `#[serde(tag = "type")]` attribute handles the discriminator
//! automatically.  A message with an unknown `"type"`, a missing field, or a
//! structurally invalid body fails deserialization — the server rejects that
//! single message and keeps consuming from the same connection.
//!
//! # Why an open `action` string?
//!
//! The protocol currently defines only one mouse action, `"click"`, but the
//! field is reserved for future gestures.  Keeping it a plain `String` (rather
//! than a closed enum) means an unrecognized action deserializes fine and is
//! dropped later as an explicit no-op by the translator, instead of tearing
//! down the message as a protocol error.

use serde::{Deserialize, Serialize};

/// The only mouse action the translator currently recognizes.
pub const ACTION_CLICK: &str = "click";

/// A single input event received from a remote client.
///
/// This is the self-describing unit of the wire protocol: field-keyed, not
/// positional, discriminated by the `"type"` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RemoteEvent {
    /// A pointer event at an absolute position in the session's window
    /// coordinate space.
    Mouse {
        /// X position in pixels, origin at the window's top-left corner.
        x: i32,
        /// Y position in pixels, origin at the window's top-left corner.
        y: i32,
        /// Gesture name.  `"click"` is the only recognized value; anything
        /// else translates to zero primitives (reserved, not an error).
        action: String,
    },

    /// A single typed character.
    Key {
        /// The character to type, as a one-character JSON string.
        #[serde(rename = "char")]
        character: char,
    },
}

impl RemoteEvent {
    /// Returns a short variant name for log messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            RemoteEvent::Mouse { .. } => "mouse",
            RemoteEvent::Key { .. } => "key",
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_click_deserializes_from_wire_json() {
        // Arrange: exactly what a remote client sends
        let json = r#"{"type":"mouse","x":10,"y":20,"action":"click"}"#;

        // Act
        let event: RemoteEvent = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(
            event,
            RemoteEvent::Mouse {
                x: 10,
                y: 20,
                action: "click".to_string()
            }
        );
    }

    #[test]
    fn test_key_event_deserializes_single_char_string() {
        let json = r#"{"type":"key","char":"A"}"#;
        let event: RemoteEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event, RemoteEvent::Key { character: 'A' });
    }

    #[test]
    fn test_key_field_is_named_char_on_the_wire() {
        // The Rust field is `character` (char is a primitive type name), but
        // the wire contract uses "char".
        let event = RemoteEvent::Key { character: 'x' };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""char":"x""#));
        assert!(!json.contains("character"));
    }

    #[test]
    fn test_mouse_event_round_trips() {
        let original = RemoteEvent::Mouse {
            x: 640,
            y: 480,
            action: "click".to_string(),
        };
        let json = serde_json::to_string(&original).unwrap();
        let decoded: RemoteEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(original, decoded);
    }

    #[test]
    fn test_unknown_action_string_still_deserializes() {
        // "drag" is not a recognized action, but it is not a protocol error:
        // the translator turns it into a no-op later.
        let json = r#"{"type":"mouse","x":1,"y":2,"action":"drag"}"#;
        let event: RemoteEvent = serde_json::from_str(json).unwrap();
        match event {
            RemoteEvent::Mouse { action, .. } => assert_eq!(action, "drag"),
            other => panic!("expected Mouse, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_discriminator_returns_error() {
        // Arrange: JSON with a discriminator this protocol does not define
        let json = r#"{"type":"touch","x":1,"y":2}"#;

        // Act
        let result: Result<RemoteEvent, _> = serde_json::from_str(json);

        // Assert: per-message rejection, not a panic
        assert!(result.is_err(), "unknown type must fail deserialization");
    }

    #[test]
    fn test_missing_discriminator_returns_error() {
        let json = r#"{"x":1,"y":2,"action":"click"}"#;
        let result: Result<RemoteEvent, _> = serde_json::from_str(json);
        assert!(result.is_err(), "missing 'type' field must fail");
    }

    #[test]
    fn test_missing_coordinate_field_returns_error() {
        let json = r#"{"type":"mouse","x":1,"action":"click"}"#;
        let result: Result<RemoteEvent, _> = serde_json::from_str(json);
        assert!(result.is_err(), "missing 'y' field must fail");
    }

    #[test]
    fn test_multi_char_key_string_returns_error() {
        // serde deserializes `char` only from a one-character string.
        let json = r#"{"type":"key","char":"ab"}"#;
        let result: Result<RemoteEvent, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_type_name_matches_variant() {
        let mouse = RemoteEvent::Mouse {
            x: 0,
            y: 0,
            action: "click".to_string(),
        };
        assert_eq!(mouse.type_name(), "mouse");
        assert_eq!(RemoteEvent::Key { character: 'q' }.type_name(), "key");
    }
}
