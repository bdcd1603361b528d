//! Atomic file write helpers.
//!
//! Writes go to a temp file in the target directory which is then renamed over
//! the destination. A failed write leaves any previous file untouched. On
//! Windows, rename-over-existing fails, so we fall back to backup-and-restore.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSyncPolicy {
    SyncAll,
    SkipSync,
}

#[derive(Debug, Clone, Copy)]
pub struct AtomicWriteOptions {
    /// Sync the temp file before it is renamed into place.
    pub file_sync: FileSyncPolicy,
    /// Best-effort sync of the parent directory after the rename.
    pub parent_dir_sync: FileSyncPolicy,
}

impl Default for AtomicWriteOptions {
    fn default() -> Self {
        Self {
            file_sync: FileSyncPolicy::SyncAll,
            parent_dir_sync: FileSyncPolicy::SkipSync,
        }
    }
}

pub fn atomic_write(path: impl AsRef<Path>, bytes: &[u8]) -> io::Result<()> {
    atomic_write_with_options(path, bytes, AtomicWriteOptions::default())
}

pub fn atomic_write_with_options(
    path: impl AsRef<Path>,
    bytes: &[u8],
    options: AtomicWriteOptions,
) -> io::Result<()> {
    let path = path.as_ref();
    let parent = parent_dir(path);

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(bytes)?;
    if options.file_sync == FileSyncPolicy::SyncAll {
        tmp.as_file().sync_all()?;
    }

    if let Err(err) = tmp.persist(path) {
        if !needs_backup_fallback(path) {
            return Err(err.error);
        }
        // Windows fallback: move the old file aside, then retry.
        let backup_path = path.with_extension("bak");
        if backup_path.exists() {
            return Err(err.error);
        }
        fs::rename(path, &backup_path)?;

        if let Err(rename_err) = err.file.persist(path) {
            let _ = fs::rename(&backup_path, path);
            return Err(rename_err.error);
        }
        if let Err(e) = fs::remove_file(&backup_path) {
            tracing::warn!(
                path = %backup_path.display(),
                "Failed to remove .bak after atomic write: {e}"
            );
        }
    }

    if options.parent_dir_sync == FileSyncPolicy::SyncAll {
        best_effort_sync_dir(parent);
    }

    Ok(())
}

/// Only a regular file on Windows, where rename cannot replace it, is moved
/// aside. Directories and other targets fail the write.
fn needs_backup_fallback(path: &Path) -> bool {
    cfg!(windows) && fs::symlink_metadata(path).is_ok_and(|meta| meta.is_file())
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn best_effort_sync_dir(dir: &Path) {
    #[cfg(unix)]
    {
        if let Err(e) = fs::File::open(dir).and_then(|d| d.sync_all()) {
            debug!(path = %dir.display(), "Directory sync_all failed (best-effort): {e}");
        }
    }

    #[cfg(not(unix))]
    debug!(path = %dir.display(), "Directory sync skipped on this platform");
}
