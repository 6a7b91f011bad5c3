//! Recursive discovery of schematic files under a directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Error, Result};

/// File-name suffix identifying KiCad schematic files.
pub const SCHEMATIC_SUFFIX: &str = ".kicad_sch";

/// Whether a path names a schematic file.
pub fn is_schematic(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().ends_with(SCHEMATIC_SUFFIX))
        .unwrap_or(false)
}

/// Find all schematic files under `root`, recursively.
///
/// Results are sorted by path so runs over the same tree visit files in
/// a deterministic order.
pub fn find_schematics(root: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    walk(root, &mut found)?;
    found.sort();
    debug!(root = %root.display(), count = found.len(), "schematic discovery complete");
    Ok(found)
}

fn walk(dir: &Path, found: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();
        if path.is_dir() {
            walk(&path, found)?;
        } else if is_schematic(&path) {
            found.push(path);
        }
    }
    Ok(())
}
