//! Frame read-out: validate the region size, copy one complete frame.
//!
//! The contract is all-or-nothing: the mapped region must be exactly
//! [`FRAMEBUFFER_LEN`] bytes or nothing is read.  A partial copy would hand
//! consumers a torn frame with no way to tell; a precise size-mismatch error
//! instead points straight at the producer/consumer version skew that caused
//! it.

use thiserror::Error;

use rds_core::framebuffer::{FrameSnapshot, FRAMEBUFFER_LEN};

use crate::shm::SharedFramebuffer;

/// Errors reading a frame out of the mapped region.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReadError {
    /// The mapped region does not match the framebuffer contract.  Almost
    /// always means the producer and this tool disagree about the resolution
    /// or pixel format.
    #[error("framebuffer size mismatch: expected {expected} bytes, region is {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// The copied bytes failed snapshot validation.  Unreachable in practice
    /// once the size check passes; kept so the snapshot constructor's error
    /// is never silently discarded.
    #[error("failed to read framebuffer contents: {0}")]
    ReadFailure(String),
}

/// Validates the region size and copies out one complete frame.
///
/// The copy decouples the returned snapshot from the live mapping: the
/// producer may overwrite the region immediately afterwards without affecting
/// the snapshot.
///
/// # Errors
///
/// Returns [`ReadError::SizeMismatch`] unless the region is exactly
/// [`FRAMEBUFFER_LEN`] bytes.
pub fn read_frame(region: &SharedFramebuffer) -> Result<FrameSnapshot, ReadError> {
    if region.len() != FRAMEBUFFER_LEN {
        return Err(ReadError::SizeMismatch {
            expected: FRAMEBUFFER_LEN,
            actual: region.len(),
        });
    }

    FrameSnapshot::from_bytes(region.as_bytes().to_vec())
        .map_err(|e| ReadError::ReadFailure(e.to_string()))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
