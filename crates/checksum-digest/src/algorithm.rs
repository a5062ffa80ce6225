use std::fmt;
use std::str::FromStr;

use crate::hasher::{AnyHasher, Hasher};
use crate::{Digest, Error, Result};

/// Supported digest algorithms.
///
/// Declaration order is the canonical order: every result listing, ledger
/// write and verification pass walks algorithms in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Algorithm {
    /// CRC-32 (IEEE), rendered big-endian.
    Crc32,
    Md5,
    Sha1,
    Sha256,
    Sha512,
    /// BLAKE2b with a 256-bit output.
    Blake2b256,
    /// BLAKE2b with a 512-bit output.
    Blake2b512,
}

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Crc32,
        Algorithm::Md5,
        Algorithm::Sha1,
        Algorithm::Sha256,
        Algorithm::Sha512,
        Algorithm::Blake2b256,
        Algorithm::Blake2b512,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Crc32 => "crc32",
            Algorithm::Md5 => "md5",
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha512 => "sha512",
            Algorithm::Blake2b256 => "blake2b256",
            Algorithm::Blake2b512 => "blake2b512",
        }
    }

    /// Digest length in bytes.
    pub fn digest_len(&self) -> usize {
        match self {
            Algorithm::Crc32 => 4,
            Algorithm::Md5 => 16,
            Algorithm::Sha1 => 20,
            Algorithm::Sha256 => 32,
            Algorithm::Sha512 => 64,
            Algorithm::Blake2b256 => 32,
            Algorithm::Blake2b512 => 64,
        }
    }

    /// Fresh, zero-state hasher for this algorithm.
    ///
    /// Every call returns an independent instance.
    pub fn hasher(&self) -> AnyHasher {
        AnyHasher::new(*self)
    }

    /// One-shot digest of an in-memory buffer.
    pub fn digest(&self, data: &[u8]) -> Digest {
        let mut hasher = self.hasher();
        hasher.update(data);
        Digest::new(hasher.finalize())
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.pad(self.as_str()) }
}

impl FromStr for Algorithm {
    type Err = Error;

    /// Case-sensitive match on the canonical names.
    fn from_str(s: &str) -> Result<Self> {
        Algorithm::ALL
            .into_iter()
            .find(|alg| alg.as_str() == s)
            .ok_or_else(|| Error::UnsupportedAlgorithm(s.to_string()))
    }
}

/// Resolve identifier strings against the registry.
///
/// Fails on the first unsupported name, before the caller touches any file.
pub fn resolve<S: AsRef<str>>(names: &[S]) -> Result<Vec<Algorithm>> {
    names.iter().map(|name| name.as_ref().parse()).collect()
}

/// Registry lookup by name: a fresh hasher or `UnsupportedAlgorithm`.
pub fn new_hasher(name: &str) -> Result<AnyHasher> {
    Ok(name.parse::<Algorithm>()?.hasher())
}
