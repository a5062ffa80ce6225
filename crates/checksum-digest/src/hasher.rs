use crate::Algorithm;

pub type Blake2b256 = blake2::Blake2b<digest::consts::U32>;
pub type Blake2b512 = blake2::Blake2b512;

/// Streaming hash state.
///
/// `finalize` consumes the hasher, so feeding bytes after the digest has been
/// produced does not compile.
pub trait Hasher: Send {
    fn update(&mut self, data: &[u8]);
    fn finalize(self) -> Vec<u8>;
}

/// Any RustCrypto `Digest` implementation.
pub struct DigestHasher<D: digest::Digest + Send>(D);

impl<D: digest::Digest + Send> DigestHasher<D> {
    pub fn new() -> Self { Self(D::new()) }
}

impl<D: digest::Digest + Send> Default for DigestHasher<D> {
    fn default() -> Self { Self::new() }
}

impl<D: digest::Digest + Send> Hasher for DigestHasher<D> {
    fn update(&mut self, data: &[u8]) { self.0.update(data); }
    fn finalize(self) -> Vec<u8> { self.0.finalize().to_vec() }
}

/// CRC-32 (IEEE) with the checksum rendered big-endian, the byte order
/// `cksum`-style tools print.
#[derive(Default)]
pub struct Crc32Hasher(crc32fast::Hasher);

impl Crc32Hasher {
    pub fn new() -> Self { Self(crc32fast::Hasher::new()) }
}

impl Hasher for Crc32Hasher {
    fn update(&mut self, data: &[u8]) { self.0.update(data); }
    fn finalize(self) -> Vec<u8> { self.0.finalize().to_be_bytes().to_vec() }
}

/// Closed dispatch over every supported algorithm.
pub enum AnyHasher {
    Crc32(Crc32Hasher),
    Md5(DigestHasher<md5::Md5>),
    Sha1(DigestHasher<sha1::Sha1>),
    Sha256(DigestHasher<sha2::Sha256>),
    Sha512(DigestHasher<sha2::Sha512>),
    Blake2b256(DigestHasher<Blake2b256>),
    Blake2b512(DigestHasher<Blake2b512>),
}

impl AnyHasher {
    pub fn new(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Crc32 => AnyHasher::Crc32(Crc32Hasher::new()),
            Algorithm::Md5 => AnyHasher::Md5(DigestHasher::new()),
            Algorithm::Sha1 => AnyHasher::Sha1(DigestHasher::new()),
            Algorithm::Sha256 => AnyHasher::Sha256(DigestHasher::new()),
            Algorithm::Sha512 => AnyHasher::Sha512(DigestHasher::new()),
            Algorithm::Blake2b256 => AnyHasher::Blake2b256(DigestHasher::new()),
            Algorithm::Blake2b512 => AnyHasher::Blake2b512(DigestHasher::new()),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            AnyHasher::Crc32(_) => Algorithm::Crc32,
            AnyHasher::Md5(_) => Algorithm::Md5,
            AnyHasher::Sha1(_) => Algorithm::Sha1,
            AnyHasher::Sha256(_) => Algorithm::Sha256,
            AnyHasher::Sha512(_) => Algorithm::Sha512,
            AnyHasher::Blake2b256(_) => Algorithm::Blake2b256,
            AnyHasher::Blake2b512(_) => Algorithm::Blake2b512,
        }
    }
}

impl Hasher for AnyHasher {
    fn update(&mut self, data: &[u8]) {
        match self {
            AnyHasher::Crc32(h) => h.update(data),
            AnyHasher::Md5(h) => h.update(data),
            AnyHasher::Sha1(h) => h.update(data),
            AnyHasher::Sha256(h) => h.update(data),
            AnyHasher::Sha512(h) => h.update(data),
            AnyHasher::Blake2b256(h) => h.update(data),
            AnyHasher::Blake2b512(h) => h.update(data),
        }
    }

    fn finalize(self) -> Vec<u8> {
        match self {
            AnyHasher::Crc32(h) => h.finalize(),
            AnyHasher::Md5(h) => h.finalize(),
            AnyHasher::Sha1(h) => h.finalize(),
            AnyHasher::Sha256(h) => h.finalize(),
            AnyHasher::Sha512(h) => h.finalize(),
            AnyHasher::Blake2b256(h) => h.finalize(),
            AnyHasher::Blake2b512(h) => h.finalize(),
        }
    }
}
