//! Platform data directory resolution.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::PathError;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "MASKPAIR_DATA_DIR";

/// Get the root directory for application data.
///
/// Resolution order:
/// 1. `MASKPAIR_DATA_DIR` environment variable
/// 2. System data directory (e.g., `~/.local/share/maskpair`)
pub fn data_root() -> Result<PathBuf, PathError> {
    if let Some(path) = env::var_os(DATA_DIR_ENV) {
        return non_empty(PathBuf::from(path));
    }

    let root = dirs::data_local_dir()
        .ok_or(PathError::NoDataDir)?
        .join("maskpair");
    ensure_dir(&root)?;
    Ok(root)
}

pub(super) fn non_empty(path: PathBuf) -> Result<PathBuf, PathError> {
    if path.as_os_str().is_empty() {
        Err(PathError::EmptyPath)
    } else {
        Ok(path)
    }
}

pub(super) fn ensure_dir(dir: &Path) -> Result<(), PathError> {
    if dir.exists() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|e| PathError::CreateFailed {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    })
}
