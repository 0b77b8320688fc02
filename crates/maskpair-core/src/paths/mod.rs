//! Path utilities for maskpair data directories.
//!
//! This module provides the canonical path resolution for all maskpair components:
//! - Application data root
//! - Database location
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - Environment lookups happen only in the public functions; the pure
//!   `ResolvedPaths` resolver takes overrides as arguments for testing

mod database;
mod error;
mod platform;
mod resolver;
#[cfg(test)]
mod test_utils;

pub use database::{DB_PATH_ENV, database_path};
pub use error::PathError;
pub use platform::{DATA_DIR_ENV, data_root};
pub use resolver::ResolvedPaths;
