//! Memory-mapped file checksums.
//!
//! Checksumming a file through a read-only memory mapping lets the
//! operating system page the contents in on demand, which is typically
//! faster than buffered reads for large files. Only available when the
//! `mmap` feature is enabled:
//!
//! ```toml
//! [dependencies]
//! oxicrc = { version = "0.1", features = ["mmap"] }
//! ```
//!
//! # Safety
//!
//! The mapping is read-only, but the caller is responsible for ensuring
//! the file is not modified by another process while it is being
//! checksummed.

use crate::crc::Crc64Iso;
use crate::digest::format_crc64;
use crate::error::Result;
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

/// Compute the CRC-64 of a file's contents via a memory mapping.
///
/// # Errors
///
/// Returns [`CrcError::Io`](crate::CrcError::Io) if the file cannot be
/// opened or mapped.
///
/// # Example
///
/// ```no_run
/// let crc = oxicrc::mmap::checksum_file("data.bin")?;
/// # Ok::<(), oxicrc::CrcError>(())
/// ```
pub fn checksum_file<P: AsRef<Path>>(path: P) -> Result<u64> {
    let file = File::open(path.as_ref())?;

    // Zero-length files cannot be mapped on every platform; the checksum
    // of no bytes is the zero state.
    if file.metadata()?.len() == 0 {
        return Ok(Crc64Iso::new().finalize());
    }

    // SAFETY: read-only mapping; the caller is responsible for ensuring
    // the file is not modified while mapped.
    let mmap = unsafe { Mmap::map(&file)? };
    Ok(Crc64Iso::compute(&mmap))
}

/// Compute the 16-character hex digest of a file's contents.
///
/// # Errors
///
/// Returns [`CrcError::Io`](crate::CrcError::Io) if the file cannot be
/// opened or mapped.
pub fn digest_file<P: AsRef<Path>>(path: P) -> Result<String> {
    Ok(format_crc64(checksum_file(path)?))
}
