use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read '{}'", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write '{}'", path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl Error {
    pub fn path(&self) -> &PathBuf {
        match self {
            Error::Read { path, .. } | Error::Write { path, .. } => path,
        }
    }

    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Error::Read { source, .. } | Error::Write { source, .. } => source.kind(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
