//! fieldsort CLI
//!
//! Reorders `(property ...)` blocks inside `(symbol ...)` blocks of
//! KiCad schematic files according to a caller-supplied priority order.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use fieldsort_core::{Placement, parse_order};

use cli::Cli;
use commands::Options;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let wanted = parse_order(&cli.order);
    if wanted.is_empty() {
        return Err(CliError::user(
            "--order contains no property names (expected e.g. \"MPN,LCSC,Datasheet\")",
        ));
    }

    let placement: Placement = cli
        .unlisted
        .parse()
        .map_err(|e: String| CliError::user(e))?;

    let opts = Options {
        wanted,
        placement,
        verbose: cli.verbose,
        dry_run: cli.dry_run,
    };

    if cli.target.is_file() {
        commands::run_file(&cli.target, &opts)
    } else if cli.target.is_dir() {
        commands::run_directory(&cli.target, &opts)
    } else {
        Err(fieldsort_fs::Error::InvalidTarget {
            path: cli.target.clone(),
        }
        .into())
    }
}
