//! Paths command handler.

use std::path::Path;

use maskpair_core::paths::{DATA_DIR_ENV, DB_PATH_ENV, data_root};

use crate::error::CliError;

/// Print the resolved data root and database file.
pub fn execute(database_path: &Path, json: bool) -> Result<(), CliError> {
    let root = data_root()?;

    if json {
        let value = paths_json(&root, database_path)?;
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("Data root: {} (override with {DATA_DIR_ENV})", root.display());
        println!(
            "Database:  {} (override with --db or {DB_PATH_ENV})",
            database_path.display()
        );
    }

    Ok(())
}

/// Build the `--json` document. Paths that are not valid UTF-8 are an error.
fn paths_json(root: &Path, database_path: &Path) -> Result<serde_json::Value, CliError> {
    let mut value = serde_json::Map::new();
    value.insert("data_root".to_string(), serde_json::to_value(root)?);
    value.insert("database".to_string(), serde_json::to_value(database_path)?);
    Ok(serde_json::Value::Object(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_json_has_both_entries() {
        let value = paths_json(Path::new("/data"), Path::new("/data/data/maskpair.db")).unwrap();
        assert_eq!(value["data_root"], "/data");
        assert_eq!(value["database"], "/data/data/maskpair.db");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_database_path_is_an_error() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let db = Path::new(OsStr::from_bytes(b"/tmp/\xff\xfe.db"));
        let err = paths_json(Path::new("/data"), db).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
        assert_eq!(err.exit_code(), 74);
    }
}
