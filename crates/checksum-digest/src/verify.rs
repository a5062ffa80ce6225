use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::{Algorithm, DigestSet, Error, Result, StreamOptions, digest_file, digest_reader};

/// Successful verification.
#[derive(Debug, Clone)]
pub struct Verified {
    /// First algorithm, in canonical order, whose digest matched.
    pub algorithm: Algorithm,
    /// Every digest computed for the file.
    pub digests:   DigestSet,
}

/// Verify a file against a hex digest of unknown algorithm.
///
/// Every supported algorithm is computed. The candidate is trimmed, then
/// compared case-sensitively against each lowercase-hex digest.
pub fn verify_file(
    path: impl AsRef<Path>,
    candidate: &str,
    options: &StreamOptions,
) -> Result<Verified> {
    let digests = digest_file(path, &Algorithm::ALL, options)?;
    check(digests, candidate)
}

/// Same as [`verify_file`] over any byte source.
pub fn verify_reader<R: Read>(reader: R, candidate: &str, options: &StreamOptions) -> Result<Verified> {
    let digests = digest_reader(reader, &Algorithm::ALL, options)?;
    check(digests, candidate)
}

fn check(digests: DigestSet, candidate: &str) -> Result<Verified> {
    let candidate = candidate.trim();
    match digests.find_match(candidate) {
        Some(algorithm) => {
            debug!(%algorithm, "checksum verified");
            Ok(Verified { algorithm, digests })
        }
        None => Err(Error::ChecksumMismatch {
            candidate: candidate.to_string(),
        }),
    }
}
