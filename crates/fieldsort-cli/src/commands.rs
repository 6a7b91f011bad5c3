//! Command implementation: process one schematic or a whole project tree.

use std::path::Path;

use colored::Colorize;
use tracing::info;

use fieldsort_core::{Placement, reorder_document, split_lines};
use fieldsort_fs::{backup_and_write, find_schematics, read_lossy};

use crate::error::Result;

/// Run configuration derived from the parsed arguments.
#[derive(Debug, Clone)]
pub struct Options {
    /// Property names in priority order, already split and trimmed.
    pub wanted: Vec<String>,
    /// Placement of properties not named in the order.
    pub placement: Placement,
    /// Print per-symbol before/after name lists.
    pub verbose: bool,
    /// Compute changes without touching the filesystem.
    pub dry_run: bool,
}

/// Process one schematic file end to end.
///
/// Reads the file permissively, reorders each symbol's properties, and
/// commits the result (backup, then atomic write) when anything changed
/// and dry-run is off. Returns whether the file's content changed.
pub fn process_file(path: &Path, opts: &Options) -> Result<bool> {
    let content = read_lossy(path)?;
    let mut lines = split_lines(&content);

    let changes = reorder_document(&mut lines, &opts.wanted, opts.placement);
    if changes.is_empty() {
        return Ok(false);
    }

    if opts.verbose {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        for change in &changes {
            println!(
                "  {}: BEFORE={:?}  AFTER={:?}",
                name.cyan(),
                change.before,
                change.after
            );
        }
    }

    if !opts.dry_run {
        let bak = backup_and_write(path, &lines.concat())?;
        info!(path = %path.display(), backup = %bak.display(), "schematic rewritten");
    }

    Ok(true)
}

/// Process a single file given as the target and print its summary.
pub fn run_file(path: &Path, opts: &Options) -> Result<()> {
    let changed = process_file(path, opts)?;
    print_file_summary(path, changed);
    Ok(())
}

/// Recurse over a project directory, processing every schematic found,
/// then print the run summary.
pub fn run_directory(root: &Path, opts: &Options) -> Result<()> {
    let mut scanned = 0usize;
    let mut modified = 0usize;

    for path in find_schematics(root)? {
        scanned += 1;
        let changed = process_file(&path, opts)?;
        if changed {
            modified += 1;
        }
        print_file_summary(&path, changed);
    }

    println!();
    println!(
        "{} Files scanned: {}, modified: {}.",
        "Completed.".green().bold(),
        scanned,
        modified
    );
    if modified > 0 && !opts.dry_run {
        println!("{} backups have been created.", ".bak".cyan());
    }
    Ok(())
}

fn print_file_summary(path: &Path, changed: bool) {
    if changed {
        println!("{}: {}", path.display(), "modified".green().bold());
    } else {
        println!("{}: {}", path.display(), "no change".dimmed());
    }
}
