use std::io::{self, Read};

use crate::{Algorithm, DigestSet, MultiHasher};

/// Streaming reader that hashes data as it passes through.
/// Wraps any `Read` source so a consumer can copy bytes and digest them in
/// the same pass.
pub struct DigestReader<R> {
    reader:     R,
    hasher:     MultiHasher,
    bytes_read: u64,
}

impl<R> DigestReader<R> {
    /// Create a new digest reader.
    pub fn new(reader: R, hasher: MultiHasher) -> Self {
        Self {
            reader,
            hasher,
            bytes_read: 0,
        }
    }

    /// Shorthand for a reader over a fresh [`MultiHasher`].
    pub fn with_algorithms(reader: R, algorithms: &[Algorithm]) -> Self {
        Self::new(reader, MultiHasher::new(algorithms))
    }

    /// Bytes hashed so far.
    pub fn bytes_read(&self) -> u64 { self.bytes_read }

    /// Finalize every hasher. Bytes the consumer never pulled are not hashed.
    pub fn finish(self) -> DigestSet { self.hasher.finalize() }
}

impl<R: Read> Read for DigestReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.reader.read(buf)?;
        if n > 0 {
            self.hasher.update(&buf[..n]);
            self.bytes_read += n as u64;
        }
        Ok(n)
    }
}
