//! RDS framebuffer check — library crate.
//!
//! Opens the session's shared framebuffer region read-only, validates that it
//! matches the published layout contract (800×600 RGBA8, 1,920,000 bytes),
//! and copies out one complete frame.
//!
//! Two modules:
//!
//! - [`shm`] — platform access to the named shared-memory region: a
//!   tmpfs-backed file mapped with `mmap` on unix, a named mapping object
//!   opened with `OpenFileMappingW` on Windows.
//! - [`reader`] — size validation and the copy-out into an owned
//!   [`rds_core::FrameSnapshot`].

pub mod reader;
pub mod shm;

pub use reader::{read_frame, ReadError};
pub use shm::{SharedFramebuffer, ShmError};
