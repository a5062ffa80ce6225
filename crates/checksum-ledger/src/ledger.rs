use std::path::Path;

use checksum_digest::DigestSet;
use checksum_fs::WriteOptions;
use tracing::{debug, info};

use crate::{LedgerEntry, Result};

/// How the merged ledger is written back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Stage in a temporary file and rename over the ledger.
    #[default]
    Atomic,
    /// Truncate the ledger and write in place. A failure partway can leave
    /// it truncated.
    InPlace,
}

#[derive(Clone, Copy, Debug)]
pub struct LedgerOptions {
    mode:        WriteMode,
    permissions: u32,
    sync:        bool,
}

impl Default for LedgerOptions {
    fn default() -> Self { Self::new() }
}

impl LedgerOptions {
    pub fn new() -> Self {
        Self {
            mode:        WriteMode::Atomic,
            permissions: 0o644,
            sync:        false,
        }
    }

    pub fn mode(mut self, mode: WriteMode) -> Self {
        self.mode = mode;
        self
    }

    /// Unix mode for a newly created ledger. An existing ledger keeps its own.
    pub fn permissions(mut self, permissions: u32) -> Self {
        self.permissions = permissions;
        self
    }

    pub fn sync(mut self, sync: bool) -> Self {
        self.sync = sync;
        self
    }

    pub fn get_mode(&self) -> WriteMode { self.mode }
}

/// In-memory ledger content.
///
/// Existing bytes are kept verbatim; new entries are only ever appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    content: Vec<u8>,
}

impl Ledger {
    pub fn new() -> Self { Self::default() }

    pub fn from_bytes(content: Vec<u8>) -> Self { Self { content } }

    /// Load a ledger, treating any read failure as an empty ledger.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match checksum_fs::read(path) {
            Ok(content) => Self::from_bytes(content),
            Err(e) => {
                debug!(path = %path.display(), kind = ?e.kind(), "ledger unreadable, starting empty");
                Self::new()
            }
        }
    }

    pub fn push(&mut self, entry: &LedgerEntry) {
        if self.content.last().is_some_and(|&b| b != b'\n') {
            self.content.push(b'\n');
        }
        self.content.extend_from_slice(entry.to_string().as_bytes());
        self.content.push(b'\n');
    }

    /// Append one entry per digest, in canonical algorithm order.
    pub fn append(&mut self, filename: &str, digests: &DigestSet) -> usize {
        for (_, digest) in digests.iter() {
            self.push(&LedgerEntry::new(digest, filename));
        }
        digests.len()
    }

    /// Well-formed entries, in file order. Malformed lines are skipped.
    pub fn entries(&self) -> Vec<LedgerEntry> {
        String::from_utf8_lossy(&self.content)
            .lines()
            .filter_map(LedgerEntry::parse)
            .collect()
    }

    pub fn line_count(&self) -> usize {
        self.content
            .split(|&b| b == b'\n')
            .filter(|line| !line.is_empty())
            .count()
    }

    pub fn as_bytes(&self) -> &[u8] { &self.content }

    pub fn is_empty(&self) -> bool { self.content.is_empty() }

    pub fn save(&self, path: impl AsRef<Path>, options: &LedgerOptions) -> Result<()> {
        let path = path.as_ref();
        match options.mode {
            WriteMode::Atomic => {
                let mut write = WriteOptions::new().sync(options.sync);
                if !path.exists() {
                    write = write.permissions(options.permissions);
                }
                checksum_fs::atomic_write(path, &self.content, write)?;
            }
            WriteMode::InPlace => {
                let write = WriteOptions::new()
                    .sync(options.sync)
                    .permissions(options.permissions);
                checksum_fs::overwrite(path, &self.content, write)?;
            }
        }

        info!(
            path = %path.display(),
            bytes = self.content.len(),
            mode = ?options.mode,
            "ledger written"
        );
        Ok(())
    }
}

/// Merge `digests` for `filename` into the ledger at `path`.
///
/// Read failures are ignored and the ledger starts empty; write failures are
/// returned. Returns the number of entries added.
pub fn append(
    path: impl AsRef<Path>,
    filename: &str,
    digests: &DigestSet,
    options: &LedgerOptions,
) -> Result<usize> {
    let path = path.as_ref();
    let mut ledger = Ledger::load(path);
    let added = ledger.append(filename, digests);
    ledger.save(path, options)?;
    Ok(added)
}
