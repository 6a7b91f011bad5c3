//! Reading, atomic writing, and backup of schematic files.

use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::debug;

use crate::{Error, Result};

/// Suffix appended to a file's full name when it is backed up.
pub const BACKUP_SUFFIX: &str = ".bak";

/// Read a file's content as text, permissively.
///
/// Byte sequences that are not valid UTF-8 are replaced rather than
/// rejected, so foreign or partially corrupt files can still be scanned.
pub fn read_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename strategy to prevent partial writes.
/// Acquires an advisory lock to prevent concurrent access.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Generate temp file path in same directory (ensures same filesystem)
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    // Write to temp file
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    // Acquire exclusive lock
    temp_file
        .lock_exclusive()
        .map_err(|_| Error::LockFailed {
            path: path.to_path_buf(),
        })?;

    // Write content
    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;

    // Flush to disk
    temp_file
        .sync_all()
        .map_err(|e| Error::io(&temp_path, e))?;

    // Release lock (implicit on drop, but be explicit)
    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    // Atomic rename
    fs::rename(&temp_path, path).map_err(|e| Error::io(path, e))?;

    Ok(())
}

/// The backup path for `path`: the same name with `.bak` appended after
/// the existing extension (`board.kicad_sch` -> `board.kicad_sch.bak`).
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Replace a file's content, keeping the original as `<path>.bak`.
///
/// A stale backup from a previous run is removed first (a missing one
/// is ignored), the original is renamed to the backup path, and the new
/// content is written atomically to the original path. Returns the
/// backup path.
pub fn backup_and_write(path: &Path, content: &str) -> Result<PathBuf> {
    let bak = backup_path(path);
    if let Err(e) = fs::remove_file(&bak) {
        if e.kind() != std::io::ErrorKind::NotFound {
            return Err(Error::io(&bak, e));
        }
    }
    fs::rename(path, &bak).map_err(|e| Error::io(path, e))?;
    write_atomic(path, content.as_bytes())?;
    debug!(path = %path.display(), backup = %bak.display(), "file rewritten");
    Ok(bak)
}
