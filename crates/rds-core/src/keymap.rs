//! Character → Windows Virtual Key (VK) code translation.
//!
//! Reference: Windows Virtual-Key Codes (winuser.h).
//!
//! # What is a Windows Virtual Key (VK) code?
//!
//! Windows assigns each keyboard key a number called a "Virtual Key code",
//! defined in `<winuser.h>` and named `VK_*` (e.g., `VK_RETURN = 0x0D`,
//! `VK_SPACE = 0x20`).  The target window's message loop expects `WM_KEYDOWN`
//! and `WM_KEYUP` to carry a VK code in `wparam`, while `WM_CHAR` carries the
//! character's own ordinal.
//!
//! # How this mapping works
//!
//! The table encodes `VkKeyScan` semantics for the US keyboard layout as a
//! fixed function: a character maps to the VK code of the *key* that produces
//! it, so `'a'` and `'A'` both map to `VK_A = 0x41`, and `'!'` maps to the
//! `1` key (`0x31`).  Shift state is irrelevant here — the separate `WM_CHAR`
//! primitive already carries the exact character, which is what the window
//! procedure uses for text input.
//!
//! Characters with no US-layout key (anything outside printable ASCII plus a
//! few control characters) return `None`; the translator surfaces that as a
//! per-event error and posts nothing.

/// Translates a character to the Windows virtual-key code of the US-layout
/// key that produces it.
///
/// Returns `None` for characters without a VK equivalent.
pub fn vk_from_char(c: char) -> Option<u16> {
    let vk: u16 = match c {
        // ── Letters: both cases map to the same key (VK_A..VK_Z) ─────────────
        'a'..='z' => c.to_ascii_uppercase() as u16,
        'A'..='Z' => c as u16,

        // ── Digit row (VK_0..VK_9) and its shifted symbols ───────────────────
        '0'..='9' => c as u16,
        ')' => 0x30,
        '!' => 0x31,
        '@' => 0x32,
        '#' => 0x33,
        '$' => 0x34,
        '%' => 0x35,
        '^' => 0x36,
        '&' => 0x37,
        '*' => 0x38,
        '(' => 0x39,

        // ── Whitespace and control keys ──────────────────────────────────────
        ' ' => 0x20,          // VK_SPACE
        '\r' | '\n' => 0x0D,  // VK_RETURN
        '\t' => 0x09,         // VK_TAB
        '\u{8}' => 0x08,      // VK_BACK
        '\u{1B}' => 0x1B,     // VK_ESCAPE

        // ── OEM punctuation keys, unshifted and shifted pairs ────────────────
        ';' | ':' => 0xBA,    // VK_OEM_1
        '=' | '+' => 0xBB,    // VK_OEM_PLUS
        ',' | '<' => 0xBC,    // VK_OEM_COMMA
        '-' | '_' => 0xBD,    // VK_OEM_MINUS
        '.' | '>' => 0xBE,    // VK_OEM_PERIOD
        '/' | '?' => 0xBF,    // VK_OEM_2
        '`' | '~' => 0xC0,    // VK_OEM_3
        '[' | '{' => 0xDB,    // VK_OEM_4
        '\\' | '|' => 0xDC,   // VK_OEM_5
        ']' | '}' => 0xDD,    // VK_OEM_6
        '\'' | '"' => 0xDE,   // VK_OEM_7

        _ => return None,
    };
    Some(vk)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
