//! Error types for checksum operations.
//!
//! The byte-level engine is total and infallible; errors only arise at the
//! fallible edges of the crate: digest parsing, checksum verification, and
//! the I/O helpers.

use std::io;
use thiserror::Error;

/// The main error type for checksum operations.
#[derive(Debug, Error)]
pub enum CrcError {
    /// I/O error from an underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A digest string was not 16 hexadecimal characters.
    #[error("Invalid digest: {digest:?} (expected 16 hexadecimal characters)")]
    InvalidDigest {
        /// The rejected digest string.
        digest: String,
    },

    /// CRC checksum mismatch.
    #[error("CRC mismatch: expected {expected:#x}, computed {computed:#x}")]
    Mismatch {
        /// Expected CRC value supplied by the caller.
        expected: u64,
        /// CRC value computed from the data.
        computed: u64,
    },
}

/// Result type alias for checksum operations.
pub type Result<T> = std::result::Result<T, CrcError>;

impl CrcError {
    /// Create an invalid digest error.
    pub fn invalid_digest(digest: impl Into<String>) -> Self {
        Self::InvalidDigest {
            digest: digest.into(),
        }
    }

    /// Create a CRC mismatch error.
    pub fn mismatch(expected: u64, computed: u64) -> Self {
        Self::Mismatch { expected, computed }
    }
}
