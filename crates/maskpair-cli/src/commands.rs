//! Available subcommands.

use std::path::PathBuf;

use clap::Subcommand;
use maskpair_core::DEFAULT_RECENT_LIMIT;

/// Available commands for the image pair store.
#[derive(Subcommand)]
pub enum Commands {
    /// Store a new original/mask pair
    Add {
        /// Original image file
        #[arg(long)]
        original: PathBuf,
        /// Mask image file drawn over the original
        #[arg(long)]
        mask: PathBuf,
        /// Original width in pixels (read from the file when omitted)
        #[arg(long)]
        width: Option<i64>,
        /// Original height in pixels (read from the file when omitted)
        #[arg(long)]
        height: Option<i64>,
    },

    /// Show a stored pair by ID
    Show {
        /// Pair ID
        id: i64,
    },

    /// List the most recently uploaded pairs
    Recent {
        /// Maximum number of pairs to list
        #[arg(short, long, default_value_t = DEFAULT_RECENT_LIMIT, allow_negative_numbers = true)]
        limit: i64,
    },

    /// Show resolved data and database paths
    Paths,
}
