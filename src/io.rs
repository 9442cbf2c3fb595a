//! I/O adapters for streaming checksum computation.
//!
//! [`CrcReader`] and [`CrcWriter`] wrap a [`Read`] or [`Write`]
//! implementation and fold every byte actually transferred into a running
//! CRC, so data can be checksummed while it streams from a file or socket
//! without buffering the whole input. Short reads and writes are
//! respected: only bytes that crossed the adapter are counted.

use crate::crc::Crc64Iso;
use crate::error::Result;
use std::io::{self, Read, Write};

/// Default buffer size for [`checksum_reader`] (32KB).
const DEFAULT_BUFFER_SIZE: usize = 32 * 1024;

/// A reader adapter that checksums everything read through it.
///
/// # Example
///
/// ```
/// use oxicrc::CrcReader;
/// use std::io::{Cursor, Read};
///
/// let mut reader = CrcReader::new(Cursor::new(b"IHATEMATH".to_vec()));
/// let mut contents = Vec::new();
/// reader.read_to_end(&mut contents)?;
/// assert_eq!(reader.crc(), 0xE3DCADD69B01ADD1);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct CrcReader<R> {
    inner: R,
    crc: Crc64Iso,
}

impl<R> CrcReader<R> {
    /// Wrap a reader, starting from the zero state.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            crc: Crc64Iso::new(),
        }
    }

    /// The CRC of all bytes read so far.
    pub fn crc(&self) -> u64 {
        self.crc.value()
    }

    /// The current state as a `(high, low)` pair.
    pub fn pair(&self) -> (u32, u32) {
        self.crc.pair()
    }

    /// The digest of all bytes read so far.
    pub fn digest(&self) -> String {
        self.crc.digest()
    }

    /// Get a reference to the inner reader.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Get a mutable reference to the inner reader.
    ///
    /// Bytes read directly from the inner reader bypass the checksum.
    pub fn inner_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Consume the adapter and return the inner reader.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Reset the running CRC to the zero state.
    pub fn reset(&mut self) {
        self.crc.reset();
    }
}

impl<R: Read> Read for CrcReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.crc.update(&buf[..n]);
        Ok(n)
    }
}

/// A writer adapter that checksums everything written through it.
///
/// # Example
///
/// ```
/// use oxicrc::CrcWriter;
/// use std::io::Write;
///
/// let mut writer = CrcWriter::new(Vec::new());
/// writer.write_all(b"IHATEMATH")?;
/// assert_eq!(writer.crc(), 0xE3DCADD69B01ADD1);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct CrcWriter<W> {
    inner: W,
    crc: Crc64Iso,
}

impl<W> CrcWriter<W> {
    /// Wrap a writer, starting from the zero state.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            crc: Crc64Iso::new(),
        }
    }

    /// The CRC of all bytes written so far.
    pub fn crc(&self) -> u64 {
        self.crc.value()
    }

    /// The current state as a `(high, low)` pair.
    pub fn pair(&self) -> (u32, u32) {
        self.crc.pair()
    }

    /// The digest of all bytes written so far.
    pub fn digest(&self) -> String {
        self.crc.digest()
    }

    /// Get a reference to the inner writer.
    pub fn inner(&self) -> &W {
        &self.inner
    }

    /// Get a mutable reference to the inner writer.
    ///
    /// Bytes written directly to the inner writer bypass the checksum.
    pub fn inner_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Consume the adapter and return the inner writer.
    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Reset the running CRC to the zero state.
    pub fn reset(&mut self) {
        self.crc.reset();
    }
}

impl<W: Write> Write for CrcWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.crc.update(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Drain a reader and return the CRC-64 of its contents.
///
/// Reads through a fixed 32KB buffer, so arbitrarily large inputs are
/// checksummed without buffering them whole.
///
/// # Errors
///
/// Returns [`CrcError::Io`](crate::CrcError::Io) if the reader fails.
pub fn checksum_reader<R: Read>(mut reader: R) -> Result<u64> {
    let mut crc = Crc64Iso::new();
    let mut buffer = vec![0u8; DEFAULT_BUFFER_SIZE];
    loop {
        let n = reader.read(&mut buffer)?;
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

    /// Reader that returns its data in deliberately small, uneven reads.
    struct TrickleReader {
        data: Vec<u8>,
        position: usize,
        step: usize,
    }

    impl Read for TrickleReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.position >= self.data.len() {
                return Ok(0);
            }
            let n = self
                .step
                .min(buf.len())
                .min(self.data.len() - self.position);
            buf[..n].copy_from_slice(&self.data[self.position..self.position + n]);
            self.position += n;
            // Vary the next read size to exercise short reads
            self.step = self.step % 7 + 1;
            Ok(n)
        }
    }

    #[test]
    fn test_reader_matches_compute() {
        let data = b"stream me through the adapter".to_vec();
        let mut reader = CrcReader::new(Cursor::new(data.clone()));
        let mut contents = Vec::new();
        reader.read_to_end(&mut contents).expect("read failed");

        assert_eq!(contents, data);
        assert_eq!(reader.crc(), Crc64Iso::compute(&data));
    }

    #[test]
    fn test_reader_short_reads() {
        let data: Vec<u8> = (0..1000u32).map(|i| i as u8).collect();
        let mut reader = CrcReader::new(TrickleReader {
            data: data.clone(),
            position: 0,
            step: 3,
        });
        let mut contents = Vec::new();
        reader.read_to_end(&mut contents).expect("read failed");

        assert_eq!(contents, data);
        assert_eq!(reader.crc(), Crc64Iso::compute(&data));
    }

    #[test]
    fn test_writer_matches_compute() {
        let mut writer = CrcWriter::new(Vec::new());
        writer.write_all(b"IHATE").expect("write failed");
        writer.write_all(b"MATH").expect("write failed");
        writer.flush().expect("flush failed");

        assert_eq!(writer.crc(), 0xE3DCADD69B01ADD1);
        assert_eq!(writer.digest(), "E3DCADD69B01ADD1");
        assert_eq!(writer.into_inner(), b"IHATEMATH");
    }

    #[test]
    fn test_checksum_reader_helper() {
        let data = vec![0x5Au8; 100_000];
        let crc = checksum_reader(Cursor::new(data.clone())).expect("checksum failed");
        assert_eq!(crc, Crc64Iso::compute(&data));
    }

    #[test]
    fn test_checksum_reader_empty() {
        let crc = checksum_reader(Cursor::new(Vec::new())).expect("checksum failed");
        assert_eq!(crc, 0);
    }

    #[test]
    fn test_reader_reset() {
        let mut reader = CrcReader::new(Cursor::new(b"junk then real data".to_vec()));
        let mut junk = [0u8; 10];
        reader.read_exact(&mut junk).expect("read failed");

        reader.reset();
        let mut rest = Vec::new();
        reader.read_to_end(&mut rest).expect("read failed");
        assert_eq!(reader.crc(), Crc64Iso::compute(&rest));
    }
}
