//! Database path resolution.
//!
//! Provides the canonical path to the maskpair `SQLite` database file.

use std::env;
use std::path::PathBuf;

use super::error::PathError;
use super::platform::data_root;
use super::resolver::ResolvedPaths;

/// Environment variable pointing directly at the database file.
pub const DB_PATH_ENV: &str = "MASKPAIR_DB_PATH";

/// Get the path to the maskpair database file.
///
/// Uses `MASKPAIR_DB_PATH` when set, otherwise `maskpair.db` in the
/// `data/` subdirectory of the data root. The parent directory is created
/// if it doesn't exist.
pub fn database_path() -> Result<PathBuf, PathError> {
    let explicit = env::var_os(DB_PATH_ENV).map(PathBuf::from);
    let root = match explicit {
        Some(_) => None,
        None => Some(data_root()?),
    };
    ResolvedPaths::resolve(root, explicit).map(|paths| paths.database)
}
