//! Single-pass multi-algorithm digests for files.
//!
//! A file is read once, in bounded chunks, and every chunk is fed to one
//! independent hasher per requested algorithm. The algorithm set is closed
//! and ordered; that order is the one used for every listing and write.
//!
//! # Key Features
//!
//! - **Single pass**: one read of the input feeds every hasher
//! - **Bounded memory**: usage depends on the chunk size, not on the input size
//! - **Fail early**: unknown algorithm names are rejected before any I/O
//! - **Verification**: match a digest of unknown algorithm against all of them
//!
//! # Example
//!
//! ```
//! use checksum_digest::{Algorithm, DigestReader};
//!
//! let data = b"hello world";
//! let mut reader = DigestReader::with_algorithms(&data[..], &[Algorithm::Sha256]);
//! let mut buffer = Vec::new();
//! std::io::copy(&mut reader, &mut buffer).unwrap();
//!
//! let digests = reader.finish();
//! assert_eq!(
//!     digests.get(Algorithm::Sha256).unwrap().to_hex(),
//!     "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
//! );
//! ```

pub use self::algorithm::{Algorithm, new_hasher, resolve};
pub use self::digest_set::{Digest, DigestSet};
pub use self::engine::{
    DEFAULT_CHUNK_SIZE, MultiHasher, StreamOptions, digest_file, digest_file_named, digest_reader,
};
pub use self::error::{Error, Result};
pub use self::hasher::{AnyHasher, Crc32Hasher, DigestHasher, Hasher};
pub use self::reader::DigestReader;
pub use self::verify::{Verified, verify_file, verify_reader};

mod algorithm;
mod digest_set;
mod engine;
mod error;
mod hasher;
mod reader;
mod verify;
