//! Digest formatting, parsing, and verification.
//!
//! The only serialized form of a CRC state is the digest: a 16-character
//! uppercase hexadecimal string, the high half followed by the low half,
//! each zero-padded to 8 digits.

use crate::crc::{Crc64Iso, crc64_pair};
use crate::error::{CrcError, Result};

/// Format a `(high, low)` state pair as a 16-character uppercase hex
/// digest.
///
/// # Example
///
/// ```
/// use oxicrc::format_pair;
///
/// assert_eq!(format_pair((0, 0)), "0000000000000000");
/// assert_eq!(format_pair((3822890454, 2600578513)), "E3DCADD69B01ADD1");
/// ```
pub fn format_pair(pair: (u32, u32)) -> String {
    format!("{:08X}{:08X}", pair.0, pair.1)
}

/// Format a 64-bit CRC value as a digest.
pub fn format_crc64(crc: u64) -> String {
    format_pair(((crc >> 32) as u32, crc as u32))
}

/// Compute the 16-character hex digest of a text string.
///
/// The string is encoded as UTF-8 and checksummed from the zero state.
/// Byte-level callers should use [`Crc64Iso`] or
/// [`crc64_pair`](crate::crc64_pair) directly.
///
/// # Example
///
/// ```
/// use oxicrc::digest;
///
/// assert_eq!(digest("IHATEMATH"), "E3DCADD69B01ADD1");
/// ```
pub fn digest(text: &str) -> String {
    format_pair(crc64_pair(text.as_bytes(), (0, 0)))
}

/// Parse a digest string back into a `(high, low)` state pair.
///
/// Accepts exactly 16 hexadecimal characters; parsing is
/// case-insensitive, while [`format_pair`] always emits uppercase.
///
/// # Errors
///
/// Returns [`CrcError::InvalidDigest`] if the input is not 16 hex digits.
pub fn parse_digest(digest: &str) -> Result<(u32, u32)> {
    if digest.len() != 16 || !digest.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CrcError::invalid_digest(digest));
    }
    let high = u32::from_str_radix(&digest[..8], 16)
        .map_err(|_| CrcError::invalid_digest(digest))?;
    let low = u32::from_str_radix(&digest[8..], 16)
        .map_err(|_| CrcError::invalid_digest(digest))?;
    Ok((high, low))
}

/// Verify that `data` checksums to `expected`.
///
/// # Errors
///
/// Returns [`CrcError::Mismatch`] carrying both values if the computed
/// CRC disagrees.
///
/// # Example
///
/// ```
/// use oxicrc::verify;
///
/// assert!(verify(b"IHATEMATH", 0xE3DCADD69B01ADD1).is_ok());
/// assert!(verify(b"IHATEMATH", 0).is_err());
/// ```
pub fn verify(data: &[u8], expected: u64) -> Result<()> {
    let computed = Crc64Iso::compute(data);
    if computed == expected {
        Ok(())
    } else {
        Err(CrcError::mismatch(expected, computed))
    }
}
