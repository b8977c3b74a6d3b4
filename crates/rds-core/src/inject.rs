//! Event → native input primitive translation and Win32 message packing.
//!
//! [`translate`] is a pure function: it turns one wire event into the ordered
//! sequence of native input primitives the target window must receive, with
//! no I/O, no state across calls, and no dependency on the OS.  The actual
//! posting lives behind the bridge's injector trait; keeping translation here
//! makes the exact primitive sequences unit-testable on any platform.
//!
//! # Translation rules (deterministic)
//!
//! - `mouse` with `action == "click"` → three primitives, in order:
//!   pointer-move, button-down (primary button flag), button-up — all three
//!   carrying the same packed `(x, y)` pair.
//! - `mouse` with any other `action` → zero primitives (reserved, not an
//!   error).
//! - `key` → key-down with the character's virtual-key code, character input
//!   with the character's ordinal, key-up with the same virtual-key code.
//!   A character without a VK mapping fails the whole event before anything
//!   is emitted — the triple is never partially produced.
//!
//! No pressed-key or drag state persists across events.

use thiserror::Error;

use crate::events::{RemoteEvent, ACTION_CLICK};
use crate::keymap::vk_from_char;

// ── Win32 message constants ───────────────────────────────────────────────────
//
// The subset of winuser.h message codes this bridge posts.

pub const WM_KEYDOWN: u32 = 0x0100;
pub const WM_KEYUP: u32 = 0x0101;
pub const WM_CHAR: u32 = 0x0102;
pub const WM_MOUSEMOVE: u32 = 0x0200;
pub const WM_LBUTTONDOWN: u32 = 0x0201;
pub const WM_LBUTTONUP: u32 = 0x0202;

/// Left-button-held modifier flag carried in `wparam` of mouse messages.
pub const MK_LBUTTON: usize = 0x0001;

// ── Primitives ────────────────────────────────────────────────────────────────

/// A single ordered unit consumable by the target window's message loop.
///
/// Primitives are posted fire-and-forget; nothing owns them past the post
/// call and there is no delivery confirmation to wait on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeInputPrimitive {
    /// Pointer moved to `(x, y)`, no buttons pressed.
    PointerMove { x: i32, y: i32 },
    /// Primary button pressed at `(x, y)`.
    ButtonDown { x: i32, y: i32 },
    /// Primary button released at `(x, y)`.
    ButtonUp { x: i32, y: i32 },
    /// Key pressed, identified by its Windows virtual-key code.
    KeyDown { vk: u16 },
    /// Character input carrying the character's ordinal code point.
    Character { code: u32 },
    /// Key released, same virtual-key code as the matching [`KeyDown`].
    ///
    /// [`KeyDown`]: NativeInputPrimitive::KeyDown
    KeyUp { vk: u16 },
}

/// Errors produced while translating a wire event.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranslateError {
    /// The character has no virtual-key mapping on the target layout.
    #[error("character {0:?} cannot be mapped to a virtual key")]
    UnmappableCharacter(char),
}

/// Translates one wire event into its ordered native primitive sequence.
///
/// The result is all-or-nothing: an error means no primitives at all, and an
/// unrecognized mouse action yields an empty (but successful) sequence.
///
/// # Errors
///
/// Returns [`TranslateError::UnmappableCharacter`] for a `key` event whose
/// character has no virtual-key mapping.
pub fn translate(event: &RemoteEvent) -> Result<Vec<NativeInputPrimitive>, TranslateError> {
    match event {
        RemoteEvent::Mouse { x, y, action } => {
            if action != ACTION_CLICK {
                // Reserved for future gestures; explicitly a no-op.
                return Ok(Vec::new());
            }
            Ok(vec![
                NativeInputPrimitive::PointerMove { x: *x, y: *y },
                NativeInputPrimitive::ButtonDown { x: *x, y: *y },
                NativeInputPrimitive::ButtonUp { x: *x, y: *y },
            ])
        }

        RemoteEvent::Key { character } => {
            let vk = vk_from_char(*character)
                .ok_or(TranslateError::UnmappableCharacter(*character))?;
            Ok(vec![
                NativeInputPrimitive::KeyDown { vk },
                NativeInputPrimitive::Character {
                    code: *character as u32,
                },
                NativeInputPrimitive::KeyUp { vk },
            ])
        }
    }
}

// ── Win32 packing ─────────────────────────────────────────────────────────────

/// Packs `(x, y)` into a mouse-message `lparam` the way `MAKELONG` does:
/// low word = x, high word = y.
pub fn make_lparam(x: i32, y: i32) -> isize {
    let packed = ((y as u32 & 0xFFFF) << 16) | (x as u32 & 0xFFFF);
    packed as i32 as isize
}

/// One `PostMessage` call, fully resolved: message code plus both parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowMessage {
    pub msg: u32,
    pub wparam: usize,
    pub lparam: isize,
}

impl NativeInputPrimitive {
    /// Packs this primitive into the `PostMessage` triple the target window
    /// expects.
    pub fn to_window_message(self) -> WindowMessage {
        match self {
            NativeInputPrimitive::PointerMove { x, y } => WindowMessage {
                msg: WM_MOUSEMOVE,
                wparam: 0,
                lparam: make_lparam(x, y),
            },
            NativeInputPrimitive::ButtonDown { x, y } => WindowMessage {
                msg: WM_LBUTTONDOWN,
                wparam: MK_LBUTTON,
                lparam: make_lparam(x, y),
            },
            NativeInputPrimitive::ButtonUp { x, y } => WindowMessage {
                msg: WM_LBUTTONUP,
                wparam: 0,
                lparam: make_lparam(x, y),
            },
            NativeInputPrimitive::KeyDown { vk } => WindowMessage {
                msg: WM_KEYDOWN,
                wparam: vk as usize,
                lparam: 0,
            },
            NativeInputPrimitive::Character { code } => WindowMessage {
                msg: WM_CHAR,
                wparam: code as usize,
                lparam: 0,
            },
            NativeInputPrimitive::KeyUp { vk } => WindowMessage {
                msg: WM_KEYUP,
                wparam: vk as usize,
                lparam: 0,
            },
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn click(x: i32, y: i32) -> RemoteEvent {
        RemoteEvent::Mouse {
            x,
            y,
            action: "click".to_string(),
        }
    }

    // ── Mouse translation ─────────────────────────────────────────────────────

    #[test]
    fn test_mouse_click_produces_move_down_up_in_order() {
        // Arrange / Act
        let primitives = translate(&click(10, 20)).unwrap();

        // Assert: exact sequence, exact coordinates on all three
        assert_eq!(
            primitives,
            vec![
                NativeInputPrimitive::PointerMove { x: 10, y: 20 },
                NativeInputPrimitive::ButtonDown { x: 10, y: 20 },
                NativeInputPrimitive::ButtonUp { x: 10, y: 20 },
            ]
        );
    }

    #[test]
    fn test_mouse_click_translation_is_repeatable() {
        // Translation is idempotent: repeated calls give identical sequences.
        let first = translate(&click(10, 20)).unwrap();
        let second = translate(&click(10, 20)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unrecognized_mouse_action_is_a_silent_no_op() {
        let event = RemoteEvent::Mouse {
            x: 5,
            y: 6,
            action: "drag".to_string(),
        };
        let primitives = translate(&event).unwrap();
        assert!(primitives.is_empty(), "reserved actions must emit nothing");
    }

    // ── Key translation ───────────────────────────────────────────────────────

    #[test]
    fn test_key_a_produces_down_char_up_with_vk_and_ordinal() {
        let primitives = translate(&RemoteEvent::Key { character: 'A' }).unwrap();
        assert_eq!(
            primitives,
            vec![
                NativeInputPrimitive::KeyDown { vk: 0x41 },
                NativeInputPrimitive::Character { code: 65 },
                NativeInputPrimitive::KeyUp { vk: 0x41 },
            ]
        );
    }

    #[test]
    fn test_lowercase_key_keeps_its_own_ordinal_but_shares_the_vk() {
        // 'a' types as the A key (VK 0x41), but WM_CHAR carries 'a' = 97.
        let primitives = translate(&RemoteEvent::Key { character: 'a' }).unwrap();
        assert_eq!(primitives[0], NativeInputPrimitive::KeyDown { vk: 0x41 });
        assert_eq!(primitives[1], NativeInputPrimitive::Character { code: 97 });
        assert_eq!(primitives[2], NativeInputPrimitive::KeyUp { vk: 0x41 });
    }

    #[test]
    fn test_unmappable_character_fails_without_emitting_anything() {
        let result = translate(&RemoteEvent::Key { character: '€' });
        assert_eq!(result, Err(TranslateError::UnmappableCharacter('€')));
    }

    // ── Win32 packing ─────────────────────────────────────────────────────────

    #[test]
    fn test_make_lparam_packs_low_word_x_high_word_y() {
        assert_eq!(make_lparam(10, 20), ((20 << 16) | 10) as isize);
        assert_eq!(make_lparam(0, 0), 0);
    }

    #[test]
    fn test_make_lparam_truncates_to_sixteen_bits_per_coordinate() {
        // Coordinates above 0xFFFF wrap, exactly like MAKELONG.
        assert_eq!(make_lparam(0x1_0005, 0), make_lparam(5, 0));
    }

    #[test]
    fn test_pointer_move_packs_to_wm_mousemove_with_no_buttons() {
        let msg = NativeInputPrimitive::PointerMove { x: 10, y: 20 }.to_window_message();
        assert_eq!(
            msg,
            WindowMessage {
                msg: WM_MOUSEMOVE,
                wparam: 0,
                lparam: make_lparam(10, 20)
            }
        );
    }

    #[test]
    fn test_button_down_carries_mk_lbutton() {
        let msg = NativeInputPrimitive::ButtonDown { x: 1, y: 2 }.to_window_message();
        assert_eq!(msg.msg, WM_LBUTTONDOWN);
        assert_eq!(msg.wparam, MK_LBUTTON);
    }

    #[test]
    fn test_button_up_carries_no_buttons() {
        let msg = NativeInputPrimitive::ButtonUp { x: 1, y: 2 }.to_window_message();
        assert_eq!(msg.msg, WM_LBUTTONUP);
        assert_eq!(msg.wparam, 0);
    }

    #[test]
    fn test_click_triple_shares_one_lparam() {
        // All three mouse messages of a click must carry the same packed pair.
        let messages: Vec<WindowMessage> = translate(&click(123, 456))
            .unwrap()
            .into_iter()
            .map(NativeInputPrimitive::to_window_message)
            .collect();
        assert_eq!(messages.len(), 3);
        assert!(messages.iter().all(|m| m.lparam == make_lparam(123, 456)));
    }

    #[test]
    fn test_key_messages_pack_vk_and_ordinal_into_wparam() {
        let messages: Vec<WindowMessage> = translate(&RemoteEvent::Key { character: 'A' })
            .unwrap()
            .into_iter()
            .map(NativeInputPrimitive::to_window_message)
            .collect();
        assert_eq!(
            messages,
            vec![
                WindowMessage { msg: WM_KEYDOWN, wparam: 0x41, lparam: 0 },
                WindowMessage { msg: WM_CHAR, wparam: 65, lparam: 0 },
                WindowMessage { msg: WM_KEYUP, wparam: 0x41, lparam: 0 },
            ]
        );
    }
}
