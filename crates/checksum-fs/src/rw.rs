use crate::{Error, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, Default)]
pub struct WriteOptions {
    pub permissions: Option<u32>,
    pub sync: bool,
}

impl WriteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unix mode for the written file. Ignored elsewhere.
    ///
    /// When unset, an atomic write keeps the permissions of the file it
    /// replaces.
    pub fn permissions(mut self, mode: u32) -> Self {
        self.permissions = Some(mode);
        self
    }

    pub fn sync(mut self, sync: bool) -> Self {
        self.sync = sync;
        self
    }
}

/// Replace `path` with `content` through a sibling temporary file and a rename.
///
/// Readers observe either the old content or the new one, never a prefix.
/// A symlinked `path` updates the file it points to. An existing target the
/// caller cannot write is refused.
/// The temporary file is removed on any failure.
pub fn atomic_write(path: impl AsRef<Path>, content: &[u8], options: WriteOptions) -> Result<()> {
    let path = path.as_ref();
    let write_err = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let target = resolve_target(path).map_err(write_err)?;
    let parent = target
        .parent()
        .ok_or_else(|| write_err(io::Error::other("no parent directory")))?;
    let file_name = target
        .file_name()
        .ok_or_else(|| write_err(io::Error::other("no file name")))?;

    let tmp_path = parent.join(format!(
        ".{}.{}.tmp",
        file_name.to_string_lossy(),
        uuid::Uuid::new_v4().simple()
    ));

    let inherited = fs::metadata(&target).ok().map(|m| m.permissions());

    let staged = (|| -> io::Result<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&tmp_path)?;
        file.write_all(content)?;

        match options.permissions {
            Some(mode) => apply_mode(&file, mode)?,
            None => {
                if let Some(perms) = inherited {
                    file.set_permissions(perms)?;
                }
            }
        }

        if options.sync {
            file.sync_all()?;
        }
        drop(file);

        fs::rename(&tmp_path, &target)
    })();

    staged.map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        write_err(e)
    })
}

/// Follow symlinks to the file being replaced and require it to be writable
/// by the caller. A path that does not exist yet is used as given.
fn resolve_target(path: &Path) -> io::Result<PathBuf> {
    match fs::canonicalize(path) {
        Ok(target) => {
            OpenOptions::new().write(true).open(&target)?;
            Ok(target)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(path.to_path_buf()),
        Err(e) => Err(e),
    }
}

/// Truncate `path` and write `content` into it in place.
///
/// A failure partway leaves the file truncated or partially written. Mode
/// bits from `options` only apply when the file is created.
pub fn overwrite(path: impl AsRef<Path>, content: &[u8], options: WriteOptions) -> Result<()> {
    let path = path.as_ref();

    let mut open = OpenOptions::new();
    open.write(true).create(true).truncate(true);

    #[cfg(unix)]
    if let Some(mode) = options.permissions {
        use std::os::unix::fs::OpenOptionsExt;
        open.mode(mode);
    }

    let written = open.open(path).and_then(|mut file| {
        file.write_all(content)?;
        if options.sync {
            file.sync_all()?;
        }
        Ok(())
    });

    written.map_err(|e| Error::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

pub fn read(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).map_err(|e| Error::Read {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(unix)]
fn apply_mode(file: &File, mode: u32) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn apply_mode(_file: &File, _mode: u32) -> io::Result<()> {
    Ok(())
}
