//! Pure path resolver.
//!
//! Takes every override as an argument so resolution can be tested without
//! touching the process environment.

use std::path::PathBuf;

use super::error::PathError;
use super::platform::{ensure_dir, non_empty};

/// File name of the database inside `<data root>/data`.
const DATABASE_FILE: &str = "maskpair.db";

/// Resolved locations used by the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Data root, when the database lives under it.
    pub data_root: Option<PathBuf>,
    /// Database file.
    pub database: PathBuf,
}

impl ResolvedPaths {
    /// Resolve the database location.
    ///
    /// An explicit database path wins over the data root. The database's
    /// parent directory is created when missing.
    pub fn resolve(
        data_root: Option<PathBuf>,
        database: Option<PathBuf>,
    ) -> Result<Self, PathError> {
        let (data_root, database) = match (data_root, database) {
            (root, Some(db)) => (root, non_empty(db)?),
            (Some(root), None) => {
                let root = non_empty(root)?;
                let db = root.join("data").join(DATABASE_FILE);
                (Some(root), db)
            }
            (None, None) => return Err(PathError::NoDataDir),
        };

        if let Some(parent) = database.parent() {
            if !parent.as_os_str().is_empty() {
                ensure_dir(parent)?;
            }
        }

        Ok(Self {
            data_root,
            database,
        })
    }
}
