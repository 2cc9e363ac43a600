//! Byte reader over a seekable source.
//!
//! Every short read surfaces as [`FormatError::Truncated`] through the
//! `From<io::Error>` conversion.

use std::io::{Read, Seek, SeekFrom};

use crate::error::FormatError;

pub(crate) struct ByteReader<R> {
    inner: R,
}

impl<R: Read + Seek> ByteReader<R> {
    pub(crate) fn new(inner: R) -> Self {
        Self { inner }
    }

    pub(crate) fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], FormatError> {
        let mut buf = [0u8; N];
        self.inner.read_exact(&mut buf)?;
        Ok(buf)
    }

    pub(crate) fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), FormatError> {
        self.inner.read_exact(buf)?;
        Ok(())
    }

    /// Move to an absolute offset. Seeking past the end is allowed; the next
    /// read reports the truncation.
    pub(crate) fn set_position(&mut self, pos: u64) -> Result<(), FormatError> {
        self.inner.seek(SeekFrom::Start(pos))?;
        Ok(())
    }

    /// Total length of the source. The current position is left unchanged.
    pub(crate) fn stream_len(&mut self) -> Result<u64, FormatError> {
        let pos = self.inner.stream_position()?;
        let len = self.inner.seek(SeekFrom::End(0))?;
        if pos != len {
            self.inner.seek(SeekFrom::Start(pos))?;
        }
        Ok(len)
    }

    pub(crate) fn skip(&mut self, n: usize) -> Result<(), FormatError> {
        if n > 0 {
            // n is at most 3 (row padding)
            self.inner.seek_relative(n as i64)?;
        }
        Ok(())
    }
}
