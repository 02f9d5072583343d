//! Bounded I/O utilities for sampling reads.
//!
//! Every helper opens its own handle and drops it before returning, so no
//! file handle outlives a single probe or sample.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;
use tracing::{debug, trace};

/// A bounded reader that limits the amount of data read.
pub struct BoundedReader<R> {
    inner: R,
    bytes_read: u64,
    limit: u64,
}

impl<R: Read> BoundedReader<R> {
    pub fn new(reader: R, limit: u64) -> Self {
        Self {
            inner: reader,
            bytes_read: 0,
            limit,
        }
    }

    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Read until the limit or EOF, whichever comes first.
    pub fn read_to_limit(&mut self) -> io::Result<Vec<u8>> {
        let mut data = Vec::with_capacity(self.limit.min(64 * 1024) as usize);
        self.read_to_end(&mut data)?;
        Ok(data)
    }
}

impl<R: Read> Read for BoundedReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.bytes_read >= self.limit {
            trace!("BoundedReader reached limit of {} bytes", self.limit);
            return Ok(0); // EOF
        }

        let remaining = self.limit - self.bytes_read;
        let max_to_read = std::cmp::min(buf.len() as u64, remaining) as usize;
        let n = self.inner.read(&mut buf[..max_to_read])?;
        self.bytes_read += n as u64;
        Ok(n)
    }
}

/// Utility functions for bounded file reads.
pub struct IOUtils;

impl IOUtils {
    /// Read up to `len` bytes starting at `offset`.
    ///
    /// A file shorter than `offset + len` yields fewer bytes; seeking past
    /// the end yields none.
    pub fn read_at<P: AsRef<Path>>(path: P, offset: u64, len: usize) -> io::Result<Vec<u8>> {
        let mut file = File::open(path.as_ref())?;
        file.seek(SeekFrom::Start(offset))?;
        let data = BoundedReader::new(file, len as u64).read_to_limit()?;
        trace!(
            "read_at({:?}, offset={}, len={}) -> {} bytes",
            path.as_ref(),
            offset,
            len,
            data.len()
        );
        Ok(data)
    }

    /// Read up to `len` bytes from the start of the file.
    pub fn read_prefix<P: AsRef<Path>>(path: P, len: usize) -> io::Result<Vec<u8>> {
        Self::read_at(path, 0, len)
    }

    /// Read the first line, at most `max_len` bytes, including its `\n`.
    pub fn read_first_line<P: AsRef<Path>>(path: P, max_len: usize) -> io::Result<Vec<u8>> {
        let mut data = Self::read_prefix(path, max_len)?;
        if let Some(pos) = memchr::memchr(b'\n', &data) {
            data.truncate(pos + 1);
        }
        debug!("First line is {} bytes", data.len());
        Ok(data)
    }

    /// Check if a path exists and is a regular file.
    pub fn is_regular_file<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref()
            .metadata()
            .map(|m| m.is_file())
            .unwrap_or(false)
    }
}
