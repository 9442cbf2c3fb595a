//! Async checksum helpers.
//!
//! These helpers fold an [`AsyncRead`] stream into a CRC without
//! buffering the whole input, for use with async runtimes like Tokio.
//! Only available when the `async-io` feature is enabled:
//!
//! ```toml
//! [dependencies]
//! oxicrc = { version = "0.1", features = ["async-io"] }
//! ```

use crate::crc::Crc64Iso;
use crate::error::Result;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Default buffer size for async operations (32KB).
const DEFAULT_BUFFER_SIZE: usize = 32 * 1024;

/// Compute the CRC-64 of everything an async reader yields.
///
/// # Errors
///
/// Returns [`CrcError::Io`](crate::CrcError::Io) if the reader fails.
///
/// # Example
///
/// ```no_run
/// use std::io::Cursor;
///
/// # async fn example() -> oxicrc::Result<()> {
/// let mut reader = Cursor::new(b"IHATEMATH".to_vec());
/// let crc = oxicrc::async_io::checksum_async(&mut reader).await?;
/// assert_eq!(crc, 0xE3DCADD69B01ADD1);
/// # Ok(())
/// # }
/// ```
pub async fn checksum_async<R>(reader: &mut R) -> Result<u64>
where
    R: AsyncRead + Unpin,
{
    checksum_async_with_buffer(reader, DEFAULT_BUFFER_SIZE).await
}

/// Compute the CRC-64 of an async reader's contents with a custom buffer
/// size.
///
/// # Errors
///
/// Returns [`CrcError::Io`](crate::CrcError::Io) if the reader fails.
pub async fn checksum_async_with_buffer<R>(reader: &mut R, buffer_size: usize) -> Result<u64>
where
    R: AsyncRead + Unpin,
{
    let mut crc = Crc64Iso::new();
    let mut buffer = vec![0u8; buffer_size];
    loop {
        let n = reader.read(&mut buffer).await?;
        if n == 0 {
            break;
        }
        crc.update(&buffer[..n]);
    }
    Ok(crc.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tokio::io::BufReader;

    #[tokio::test]
    async fn test_checksum_async_known_vector() {
        let mut reader = Cursor::new(b"IHATEMATH".to_vec());
        let crc = checksum_async(&mut reader).await.expect("checksum failed");
        assert_eq!(crc, 0xE3DCADD69B01ADD1);
    }

    #[tokio::test]
    async fn test_checksum_async_empty() {
        let mut reader = Cursor::new(Vec::new());
        let crc = checksum_async(&mut reader).await.expect("checksum failed");
        assert_eq!(crc, 0);
    }

    #[tokio::test]
    async fn test_checksum_async_matches_sync() {
        let data: Vec<u8> = (0..100_000u32).map(|i| (i * 7 % 256) as u8).collect();
        let mut reader = Cursor::new(data.clone());
        let crc = checksum_async(&mut reader).await.expect("checksum failed");
        assert_eq!(crc, Crc64Iso::compute(&data));
    }

    #[tokio::test]
    async fn test_small_buffer() {
        let data = b"buffered in tiny pieces".to_vec();
        let mut reader = Cursor::new(data.clone());
        let crc = checksum_async_with_buffer(&mut reader, 4)
            .await
            .expect("checksum failed");
        assert_eq!(crc, Crc64Iso::compute(&data));
    }

    #[tokio::test]
    async fn test_with_buf_reader() {
        let data = b"wrapped in a BufReader".to_vec();
        let mut reader = BufReader::new(Cursor::new(data.clone()));
        let crc = checksum_async(&mut reader).await.expect("checksum failed");
        assert_eq!(crc, Crc64Iso::compute(&data));
    }
}
