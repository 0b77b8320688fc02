//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;
use maskpair_core::paths::DB_PATH_ENV;

use crate::commands::Commands;

/// Command-line interface for storing original/mask image pairs.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "maskpair")]
#[command(about = "Store and inspect original/mask image pairs")]
#[command(version)]
pub struct Cli {
    /// Database file to use instead of the default location
    #[arg(long = "db", global = true, env = DB_PATH_ENV)]
    pub db: Option<PathBuf>,

    /// Print machine-readable JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
