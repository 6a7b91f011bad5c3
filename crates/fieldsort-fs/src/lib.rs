//! Filesystem boundary for fieldsort
//!
//! Provides permissive reading, backup-then-atomic-write commits, and
//! recursive schematic discovery. The reordering itself lives in
//! `fieldsort-core`; this crate never inspects file content.

pub mod discovery;
pub mod error;
pub mod io;

pub use discovery::{SCHEMATIC_SUFFIX, find_schematics, is_schematic};
pub use error::{Error, Result};
pub use io::{BACKUP_SUFFIX, backup_and_write, backup_path, read_lossy, write_atomic};
