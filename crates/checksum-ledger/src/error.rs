#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("ledger")]
    WriteFailed(#[source] checksum_fs::Error),
}

impl From<checksum_fs::Error> for Error {
    fn from(e: checksum_fs::Error) -> Self { Self::WriteFailed(e) }
}

pub type Result<T> = std::result::Result<T, Error>;
