//! # OxiCRC
//!
//! Pure Rust CRC-64 checksums following the ISO 3309 generator polynomial
//! (x64 + x4 + x3 + x + 1), using the reversed/right-shifting table-driven
//! algorithm from "Numerical Recipes in C".
//!
//! This crate provides:
//!
//! - [`tables`]: compile-time generated lookup tables
//! - [`crc`]: the incremental checksum engine ([`Crc64Iso`]) and the
//!   two-word state-pair API ([`crc64_pair`])
//! - [`digest`]: hex digest formatting, parsing, and verification
//! - [`io`]: [`CrcReader`]/[`CrcWriter`] adapters for streaming data
//! - [`error`]: error types
//! - `mmap` (feature `mmap`): memory-mapped file checksums
//! - `async_io` (feature `async-io`): async checksum helpers on Tokio
//!
//! The 64-bit register is historically represented as two 32-bit halves
//! so the algorithm ports to platforms without native 64-bit integers;
//! the engine here works on a native `u64` but keeps the `(high, low)`
//! pair as a compatibility representation, so digests and intermediate
//! states interoperate bit-exactly with two-word implementations.
//!
//! ## Example
//!
//! ```rust
//! use oxicrc::{Crc64Iso, crc64_pair, digest, format_pair};
//!
//! // One-shot text digest
//! assert_eq!(digest("IHATEMATH"), "E3DCADD69B01ADD1");
//!
//! // Incremental over raw bytes
//! let mut crc = Crc64Iso::new();
//! crc.update(b"IHATE");
//! crc.update(b"MATH");
//! assert_eq!(crc.finalize(), 0xE3DCADD69B01ADD1);
//!
//! // Chunked, carrying the state as a (high, low) pair
//! let pair = crc64_pair(b"IHATE", (0, 0));
//! let pair = crc64_pair(b"MATH", pair);
//! assert_eq!(format_pair(pair), "E3DCADD69B01ADD1");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod crc;
pub mod digest;
pub mod error;
pub mod io;
pub mod tables;

#[cfg(feature = "async-io")]
pub mod async_io;
#[cfg(feature = "mmap")]
pub mod mmap;

// Re-exports for convenience
pub use crc::{Crc64Iso, crc64_pair};
pub use digest::{digest, format_crc64, format_pair, parse_digest, verify};
pub use error::{CrcError, Result};
pub use io::{CrcReader, CrcWriter, checksum_reader};
pub use tables::CrcTables;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::crc::{Crc64Iso, crc64_pair};
    pub use crate::digest::{digest, format_pair, parse_digest, verify};
    pub use crate::error::{CrcError, Result};
    pub use crate::io::{CrcReader, CrcWriter};
}
