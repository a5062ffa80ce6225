use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

use crate::hasher::{AnyHasher, Hasher};
use crate::{Algorithm, Digest, DigestReader, DigestSet, Error, Result, algorithm};

/// Read size used when none is configured.
pub const DEFAULT_CHUNK_SIZE: usize = 32 * 1024;

#[derive(Clone, Copy, Debug)]
pub struct StreamOptions {
    chunk_size: usize,
}

impl Default for StreamOptions {
    fn default() -> Self { Self::new() }
}

impl StreamOptions {
    pub fn new() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Upper bound on bytes requested per read. Zero is raised to one.
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn get_chunk_size(&self) -> usize { self.chunk_size }
}

/// Fan-out of one byte stream into independent hashers.
///
/// Hashers are deduplicated and held in canonical order, so every chunk is fed
/// to them in the same order on every run.
pub struct MultiHasher {
    hashers: Vec<AnyHasher>,
}

impl MultiHasher {
    pub fn new(algorithms: &[Algorithm]) -> Self {
        let unique: BTreeSet<Algorithm> = algorithms.iter().copied().collect();
        Self {
            hashers: unique.into_iter().map(AnyHasher::new).collect(),
        }
    }

    /// Every supported algorithm.
    pub fn all() -> Self { Self::new(&Algorithm::ALL) }

    pub fn algorithms(&self) -> Vec<Algorithm> {
        self.hashers.iter().map(AnyHasher::algorithm).collect()
    }

    pub fn len(&self) -> usize { self.hashers.len() }

    pub fn is_empty(&self) -> bool { self.hashers.is_empty() }

    pub fn update(&mut self, data: &[u8]) {
        for hasher in &mut self.hashers {
            hasher.update(data);
        }
    }

    pub fn finalize(self) -> DigestSet {
        self.hashers
            .into_iter()
            .map(|hasher| (hasher.algorithm(), Digest::new(hasher.finalize())))
            .collect()
    }
}

/// Digest a file by algorithm names.
///
/// Names are resolved before the file is opened, so an unsupported name is
/// reported even when the path does not exist.
pub fn digest_file_named<S: AsRef<str>>(
    path: impl AsRef<Path>,
    names: &[S],
    options: &StreamOptions,
) -> Result<DigestSet> {
    let algorithms = algorithm::resolve(names)?;
    digest_file(path, &algorithms, options)
}

/// Digest a regular file in a single streaming pass.
///
/// The file is opened even for an empty request so access problems surface
/// eagerly, but it is only read when at least one algorithm was requested.
pub fn digest_file(
    path: impl AsRef<Path>,
    algorithms: &[Algorithm],
    options: &StreamOptions,
) -> Result<DigestSet> {
    let path = path.as_ref();
    let hasher = MultiHasher::new(algorithms);
    let file = open_regular(path)?;

    debug!(
        path = %path.display(),
        algorithms = ?hasher.algorithms(),
        chunk_size = options.get_chunk_size(),
        "digesting file"
    );

    stream(file, hasher, options)
}

/// Digest any byte source in a single streaming pass.
pub fn digest_reader<R: Read>(
    reader: R,
    algorithms: &[Algorithm],
    options: &StreamOptions,
) -> Result<DigestSet> {
    stream(reader, MultiHasher::new(algorithms), options)
}

fn open_regular(path: &Path) -> Result<File> {
    let access = |source| Error::FileAccess {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(access)?;
    let metadata = file.metadata().map_err(access)?;
    if !metadata.is_file() {
        return Err(access(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a regular file",
        )));
    }
    Ok(file)
}

fn stream<R: Read>(reader: R, hasher: MultiHasher, options: &StreamOptions) -> Result<DigestSet> {
    if hasher.is_empty() {
        return Ok(DigestSet::new());
    }

    let mut reader = DigestReader::new(reader, hasher);
    let mut chunk = vec![0u8; options.get_chunk_size()];

    loop {
        match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(Error::ChecksumIo(e)),
        }
    }

    debug!(bytes = reader.bytes_read(), "digest stream complete");
    Ok(reader.finish())
}
