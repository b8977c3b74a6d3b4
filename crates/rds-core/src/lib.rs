//! # rds-core
//!
//! Shared library for the RDS Broadway bridge containing the JSON event wire
//! types, the shared-memory framebuffer layout contract, the character→
//! virtual-key translation table, and the event→native-primitive translator.
//!
//! This crate is used by both the input bridge and the framebuffer validator.
//! It has zero dependencies on OS APIs, UI frameworks, or network sockets.
//!
//! # Architecture overview
//!
//! A headless Wine RDS session renders its desktop into a fixed-size
//! shared-memory framebuffer and exposes a single top-level window that
//! receives all input.  Two consumer-side processes complete the bridge:
//!
//! - **`rds-fbcheck`** opens the shared framebuffer read-only and validates
//!   that the producer honours the fixed 800×600 RGBA8 layout.
//! - **`rds-input-bridge`** accepts JSON input events from remote clients
//!   over WebSocket and posts them as Win32 window messages into the
//!   session's target window.
//!
//! This crate (`rds-core`) is the shared foundation.  It defines:
//!
//! - **`events`** – The JSON wire format: one self-describing message per
//!   logical input event, discriminated by a `"type"` field.
//!
//! - **`framebuffer`** – The fixed binary layout both sides of the shared
//!   memory region agree on, and the owned [`FrameSnapshot`] copied out of it.
//!
//! - **`keymap`** – A static table mapping characters to the Windows
//!   virtual-key codes the target window expects.
//!
//! - **`inject`** – The deterministic translation from one wire event to an
//!   ordered sequence of native input primitives, and the packing of each
//!   primitive into a Win32 `PostMessage` triple.

pub mod events;
pub mod framebuffer;
pub mod inject;
pub mod keymap;

// Re-export the most-used types at the crate root so callers can write
// `rds_core::RemoteEvent` instead of `rds_core::events::RemoteEvent`.
pub use events::RemoteEvent;
pub use framebuffer::{FrameSnapshot, FRAMEBUFFER_LEN, HEIGHT, WIDTH};
pub use inject::{translate, NativeInputPrimitive, TranslateError, WindowMessage};
