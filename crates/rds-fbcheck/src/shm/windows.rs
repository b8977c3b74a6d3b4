//! Windows shared-memory access: named mapping object via `OpenFileMappingW`.
//!
//! The producer creates the mapping object at a fixed size, so unlike the
//! unix file-backed path there is no size to discover: the view is requested
//! at exactly the contract length and a shorter object fails to map.  The
//! reader's size check then always passes on Windows, which is the correct
//! degenerate case.

#![cfg(windows)]

use std::slice;

use windows::core::HSTRING;
use windows::Win32::Foundation::{CloseHandle, HANDLE, ERROR_ACCESS_DENIED};
use windows::Win32::System::Memory::{
    MapViewOfFile, OpenFileMappingW, UnmapViewOfFile, FILE_MAP_READ, MEMORY_MAPPED_VIEW_ADDRESS,
};

use rds_core::framebuffer::FRAMEBUFFER_LEN;

use super::ShmError;

/// A read-only view of the named framebuffer mapping object.
pub struct SharedFramebuffer {
    handle: HANDLE,
    view: MEMORY_MAPPED_VIEW_ADDRESS,
    len: usize,
}

// The view is read-only and unmapped exactly once in Drop.
unsafe impl Send for SharedFramebuffer {}
unsafe impl Sync for SharedFramebuffer {}

impl SharedFramebuffer {
    /// Opens the mapping object `name` and maps a full-contract-length view.
    ///
    /// # Errors
    ///
    /// - [`ShmError::NotFound`] when no mapping object with that name exists.
    /// - [`ShmError::PermissionDenied`] when the object exists but read
    ///   access is refused.
    /// - [`ShmError::MapFailed`] when the view cannot be created (e.g., the
    ///   producer created a smaller object).
    pub fn open(name: &str) -> Result<Self, ShmError> {
        let name_w = HSTRING::from(name);

        let handle = unsafe { OpenFileMappingW(FILE_MAP_READ.0, false, &name_w) }.map_err(|e| {
            if e.code() == ERROR_ACCESS_DENIED.to_hresult() {
                ShmError::PermissionDenied(name.to_string())
            } else {
                ShmError::NotFound(name.to_string())
            }
        })?;

        // SAFETY: handle is a valid mapping handle from OpenFileMappingW.
        let view = unsafe { MapViewOfFile(handle, FILE_MAP_READ, 0, 0, FRAMEBUFFER_LEN) };
        if view.Value.is_null() {
            let reason = std::io::Error::last_os_error().to_string();
            // SAFETY: handle is valid and closed exactly once on this path.
            unsafe {
                let _ = CloseHandle(handle);
            }
            return Err(ShmError::MapFailed {
                name: name.to_string(),
                reason,
            });
        }

        Ok(Self {
            handle,
            view,
            len: FRAMEBUFFER_LEN,
        })
    }

    /// Size of the mapped view in bytes; always the contract length.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Never true: the view is always the full contract length.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Borrows the mapped bytes.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: view/len describe a live read-only view owned by self.
        unsafe { slice::from_raw_parts(self.view.Value as *const u8, self.len) }
    }
}

impl Drop for SharedFramebuffer {
    fn drop(&mut self) {
        // SAFETY: view and handle came from a successful open; both are
        // released exactly once.
        unsafe {
            let _ = UnmapViewOfFile(self.view);
            let _ = CloseHandle(self.handle);
        }
    }
}
