//! Shared CLI presentation utilities.
//!
//! Format-only helpers: no domain transforms happen here.

pub mod pair_display;
pub mod tables;

// Re-export commonly used items
pub use pair_display::{display_pair, format_pair_row, pair_table_header};
pub use tables::{format_optional, print_separator, truncate_string};
