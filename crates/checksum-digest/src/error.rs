use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("file: {}", path.display())]
    FileAccess { path: PathBuf, source: io::Error },

    #[error("checksum")]
    ChecksumIo(#[source] io::Error),

    #[error("invalid checksum: {candidate:?} matches no computed digest")]
    ChecksumMismatch { candidate: String },
}

pub type Result<T> = std::result::Result<T, Error>;
