//! CLI argument parsing using clap derive

use clap::Parser;
use std::path::PathBuf;

/// Reorder symbol properties in KiCad schematics, safely
///
/// Examples:
///   fieldsort board.kicad_sch --order "MPN,LCSC"
///   fieldsort ./project --order "MPN,LCSC,Manufacturer,Datasheet" --unlisted after
///   fieldsort ./project --order "MPN,LCSC" --dry-run --verbose
#[derive(Parser, Debug)]
#[command(name = "fieldsort")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Schematic file, or directory searched recursively for *.kicad_sch
    pub target: PathBuf,

    /// Comma-separated property names in the desired order
    ///
    /// Example: "MPN,LCSC,Manufacturer,Datasheet,Note"
    #[arg(long)]
    pub order: String,

    /// Where properties not named in --order are placed
    #[arg(long, default_value = "after", value_parser = ["before", "after"])]
    pub unlisted: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Compute changes but leave every file on disk untouched
    #[arg(long)]
    pub dry_run: bool,
}
