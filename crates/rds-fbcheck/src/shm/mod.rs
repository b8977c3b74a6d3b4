//! Platform access to the named shared-memory framebuffer region.
//!
//! The producing session exports one frame's worth of RGBA8 pixels under a
//! well-known name (see `rds_core::framebuffer::default_shm_name`).  How that
//! name resolves differs per platform:
//!
//! - **unix** — the region is a plain file under tmpfs
//!   (`/dev/shm/winerds_framebuffer`), opened with ordinary file APIs and
//!   mapped read-only with `mmap`.
//! - **windows** — the region is a named kernel mapping object
//!   (`Global\winerds_framebuffer`), opened with `OpenFileMappingW` and
//!   mapped with `MapViewOfFile`.
//!
//! Both implementations expose the same [`SharedFramebuffer`] type: open by
//! name, borrow the mapped bytes, unmap on drop.  Consumers never write
//! through the mapping.

use thiserror::Error;

#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

#[cfg(unix)]
pub use self::unix::SharedFramebuffer;
#[cfg(windows)]
pub use self::windows::SharedFramebuffer;

/// Errors opening or mapping the shared framebuffer region.
#[derive(Debug, Error)]
pub enum ShmError {
    /// The named region does not exist; the session has probably not started
    /// (or has not exported its framebuffer yet).
    #[error("shared memory region {0:?} not found")]
    NotFound(String),

    /// The region exists but this process may not read it.
    #[error("permission denied opening shared memory region {0:?}")]
    PermissionDenied(String),

    /// The region was found but could not be mapped into this process.
    #[error("failed to map shared memory region {name:?}: {reason}")]
    MapFailed { name: String, reason: String },
}
