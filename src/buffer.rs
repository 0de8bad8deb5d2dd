//! Fixed-capacity output buffer.

/// Returned when a write does not fit in the remaining capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Full;

/// Append-only byte buffer that refuses to grow past its capacity.
///
/// Storage is reserved once, up front, for the smaller of the capacity and the most the
/// caller can write. Writes that do not fit are cut at the capacity boundary and
/// reported as [`Full`].
#[derive(Debug)]
pub(crate) struct BoundedBuf {
    bytes: Vec<u8>,
    capacity: usize,
}

impl BoundedBuf {
    /// `max_len` bounds how much will ever be written; it keeps an effectively unbounded
    /// `capacity` from being reserved.
    pub fn new(capacity: usize, max_len: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity.min(max_len)),
            capacity,
        }
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.capacity - self.bytes.len()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.remaining() == 0
    }

    #[inline]
    pub fn push(&mut self, byte: u8) -> Result<(), Full> {
        if self.is_full() {
            return Err(Full);
        }
        self.bytes.push(byte);
        Ok(())
    }

    /// Writes `count` copies of `byte`, as many as fit.
    pub fn fill(&mut self, byte: u8, count: usize) -> Result<(), Full> {
        let n = count.min(self.remaining());
        self.bytes.resize(self.bytes.len() + n, byte);
        if n < count { Err(Full) } else { Ok(()) }
    }

    /// Writes `src`, or its longest prefix that fits.
    pub fn extend(&mut self, src: &[u8]) -> Result<(), Full> {
        let n = src.len().min(self.remaining());
        self.bytes.extend_from_slice(&src[..n]);
        if n < src.len() { Err(Full) } else { Ok(()) }
    }

    /// Returns the written bytes, releasing the unused part of the reservation.
    pub fn into_vec(mut self) -> Vec<u8> {
        self.bytes.shrink_to_fit();
        self.bytes
    }
}
