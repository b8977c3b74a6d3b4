//! The shared framebuffer layout contract.
//!
//! The producing session and every consumer agree on this layout out of band;
//! nothing is negotiated at runtime.  The region is always raw RGBA8 pixels,
//! row-major, no stride padding:
//!
//! ```text
//! byte offset = (y * WIDTH + x) * BYTES_PER_PIXEL
//! total size  = 800 * 600 * 4 = 1,920,000 bytes
//! ```
//!
//! A region of any other size is a hard validation failure — there are no
//! partial reads.

use thiserror::Error;

// ── Layout constants ──────────────────────────────────────────────────────────

/// Framebuffer width in pixels.
pub const WIDTH: usize = 800;

/// Framebuffer height in pixels.
pub const HEIGHT: usize = 600;

/// Bytes per pixel (RGBA8).
pub const BYTES_PER_PIXEL: usize = 4;

/// Total region size in bytes; fixed contract with the producer.
pub const FRAMEBUFFER_LEN: usize = WIDTH * HEIGHT * BYTES_PER_PIXEL;

/// Default region name on unix targets.  The producer backs the region with a
/// file under tmpfs, so consumers can open it with ordinary file APIs.
pub const DEFAULT_SHM_NAME_UNIX: &str = "/dev/shm/winerds_framebuffer";

/// Default mapping-object name on windows targets.
pub const DEFAULT_SHM_NAME_WINDOWS: &str = "Global\\winerds_framebuffer";

/// Returns the default shared-memory region name for the build target.
pub fn default_shm_name() -> &'static str {
    #[cfg(unix)]
    {
        DEFAULT_SHM_NAME_UNIX
    }
    #[cfg(windows)]
    {
        DEFAULT_SHM_NAME_WINDOWS
    }
}

// ── FrameSnapshot ─────────────────────────────────────────────────────────────

/// Error returned when a byte buffer does not match the framebuffer contract.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnapshotError {
    /// The buffer length is not exactly [`FRAMEBUFFER_LEN`].
    #[error("snapshot length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// An owned, immutable copy of one complete frame.
///
/// Created once per read from the live mapping and handed to a consumer —
/// no caching, no diffing.  The buffer is guaranteed to hold exactly
/// [`FRAMEBUFFER_LEN`] bytes of RGBA8 pixels in row-major order; the
/// constructor rejects anything else, so downstream code never has to
/// re-validate the length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSnapshot {
    bytes: Vec<u8>,
}

impl FrameSnapshot {
    /// Wraps an owned byte buffer as a frame snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::LengthMismatch`] unless the buffer holds
    /// exactly [`FRAMEBUFFER_LEN`] bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, SnapshotError> {
        if bytes.len() != FRAMEBUFFER_LEN {
            return Err(SnapshotError::LengthMismatch {
                expected: FRAMEBUFFER_LEN,
                actual: bytes.len(),
            });
        }
        Ok(Self { bytes })
    }

    /// Length in bytes; always [`FRAMEBUFFER_LEN`].
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// A snapshot is never empty; provided for clippy's benefit.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Borrows the raw RGBA bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the snapshot and returns the raw RGBA bytes, e.g. for writing
    /// to a dump file that an external viewer decodes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Returns the `[r, g, b, a]` pixel at `(x, y)`, or `None` when the
    /// coordinates fall outside the 800×600 grid.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= WIDTH || y >= HEIGHT {
            return None;
        }
        let offset = (y * WIDTH + x) * BYTES_PER_PIXEL;
        let p = &self.bytes[offset..offset + BYTES_PER_PIXEL];
        Some([p[0], p[1], p[2], p[3]])
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
