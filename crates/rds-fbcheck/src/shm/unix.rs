//! Unix shared-memory access: open the tmpfs-backed file and `mmap` it.
//!
//! The producer backs the region with a file under `/dev/shm`, so any path
//! openable with ordinary file APIs works — the tests point this at regular
//! temp files.  The mapping is read-only (`PROT_READ`) and shared
//! (`MAP_SHARED`), so the bytes observed are whatever the producer last
//! wrote; the consumer copies them out before interpreting anything.

#![cfg(unix)]

use std::fs::File;
use std::io::ErrorKind;
use std::os::unix::io::AsRawFd;
use std::slice;

use super::ShmError;

/// A read-only mapping of the named framebuffer region.
///
/// The mapping length is whatever size the backing file has; validating that
/// it matches the framebuffer contract is the reader's job, so a wrongly
/// sized region produces a precise size-mismatch diagnostic instead of a
/// mapping failure.
pub struct SharedFramebuffer {
    ptr: *mut libc::c_void,
    len: usize,
}

// The mapping is read-only and never remapped after construction; the raw
// pointer is only ever turned into immutable slices.
unsafe impl Send for SharedFramebuffer {}
unsafe impl Sync for SharedFramebuffer {}

impl SharedFramebuffer {
    /// Opens and maps the region at `name` (a filesystem path on unix).
    ///
    /// # Errors
    ///
    /// - [`ShmError::NotFound`] when no file exists at the path.
    /// - [`ShmError::PermissionDenied`] when the file is not readable.
    /// - [`ShmError::MapFailed`] for everything else, including an empty
    ///   backing file (zero-length `mmap` is invalid).
    pub fn open(name: &str) -> Result<Self, ShmError> {
        let file = File::open(name).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ShmError::NotFound(name.to_string()),
            ErrorKind::PermissionDenied => ShmError::PermissionDenied(name.to_string()),
            _ => ShmError::MapFailed {
                name: name.to_string(),
                reason: e.to_string(),
            },
        })?;

        let len = file
            .metadata()
            .map_err(|e| ShmError::MapFailed {
                name: name.to_string(),
                reason: e.to_string(),
            })?
            .len() as usize;

        if len == 0 {
            return Err(ShmError::MapFailed {
                name: name.to_string(),
                reason: "backing file is empty".to_string(),
            });
        }

        // SAFETY: fd is open and valid for the duration of the call; len is
        // the file's current size and non-zero.
        let ptr = unsafe {
            libc::mmap(
                std::ptr::null_mut(),
                len,
                libc::PROT_READ,
                libc::MAP_SHARED,
                file.as_raw_fd(),
                0,
            )
        };
        if ptr == libc::MAP_FAILED {
            return Err(ShmError::MapFailed {
                name: name.to_string(),
                reason: std::io::Error::last_os_error().to_string(),
            });
        }

        // The fd can close here; the mapping keeps the region alive.
        Ok(Self { ptr, len })
    }

    /// Size of the mapped region in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Never true: zero-length regions fail to open.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Borrows the mapped bytes.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: ptr/len describe a live PROT_READ mapping owned by self.
        unsafe { slice::from_raw_parts(self.ptr as *const u8, self.len) }
    }
}

impl Drop for SharedFramebuffer {
    fn drop(&mut self) {
        // SAFETY: ptr/len came from a successful mmap and are unmapped once.
        unsafe {
            libc::munmap(self.ptr, self.len);
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
