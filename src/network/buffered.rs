//! Buffered reader for byte-at-a-time protocol parsing.

use super::Read;

/// Size of the internal read buffer.
pub const BUFFER_SIZE: usize = 1024;

/// Adds a fixed-size buffer in front of any [`Read`].
///
/// Line-oriented parsing pulls one byte at a time; without a buffer every
/// byte would be a separate call into the transport.
#[derive(Debug)]
pub struct BufReader<R: Read> {
    inner: R,
    buf: [u8; BUFFER_SIZE],
    pos: usize,
    filled: usize,
}

impl<R: Read> BufReader<R> {
    /// Wraps `inner` with an empty buffer.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: [0; BUFFER_SIZE],
            pos: 0,
            filled: 0,
        }
    }

    /// Returns the bytes that have been buffered but not yet consumed.
    pub fn buffer(&self) -> &[u8] {
        &self.buf[self.pos..self.filled]
    }

    /// Returns a mutable reference to the wrapped reader.
    ///
    /// Reading directly from it skips any buffered bytes.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Unwraps the reader, discarding buffered bytes.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn fill(&mut self) -> Result<usize, R::Error> {
        let n = self.inner.read(&mut self.buf)?;
        self.pos = 0;
        self.filled = n;
        Ok(n)
    }
}

impl<R: Read> Read for BufReader<R> {
    type Error = R::Error;

    fn read(&mut self, out: &mut [u8]) -> Result<usize, Self::Error> {
        if out.is_empty() {
            return Ok(0);
        }

        if self.pos == self.filled {
            // Large reads bypass the buffer entirely.
            if out.len() >= BUFFER_SIZE {
                return self.inner.read(out);
            }
            if self.fill()? == 0 {
                return Ok(0);
            }
        }

        let available = self.buffer();
        let len = available.len().min(out.len());
        out[..len].copy_from_slice(&available[..len]);
        self.pos += len;
        Ok(len)
    }
}
