//! Database setup and initialization.
//!
//! This module provides the `setup_database()` function for initializing
//! the `SQLite` database with the `image_pairs` schema. Entry points call
//! this with the resolved database path.

use anyhow::Result;
use maskpair_core::RepositoryError;
use sqlx::{Row, SqlitePool, sqlite::SqliteConnectOptions};
use std::path::Path;

use crate::repositories::IMAGE_PAIR_COLUMNS;

/// Sets up the `SQLite` database connection and ensures the schema exists.
///
/// This function:
/// 1. Creates the parent directory and the database file if missing
/// 2. Creates the `image_pairs` table and its index
/// 3. Verifies the table carries every column the repository reads
///
/// # Example
///
/// ```rust,no_run
/// use maskpair_db::setup_database;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// let pool = setup_database(Path::new("/path/to/maskpair.db")).await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_database(db_path: &Path) -> Result<SqlitePool> {
    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let pool = SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true),
    )
    .await?;

    create_schema(&pool).await?;
    verify_schema(&pool).await?;

    tracing::debug!(path = %db_path.display(), "Database ready");
    Ok(pool)
}

/// Sets up an in-memory `SQLite` database for testing.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database() -> Result<SqlitePool> {
    let pool = SqlitePool::connect("sqlite::memory:").await?;
    create_schema(&pool).await?;
    Ok(pool)
}

/// Creates the `image_pairs` table and index.
///
/// Safe to call multiple times as all statements use IF NOT EXISTS.
pub async fn create_schema(pool: &SqlitePool) -> Result<()> {
    // AUTOINCREMENT keeps ids from being reused after deletes by other tools
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS image_pairs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            original_filename TEXT NOT NULL,
            original_path TEXT NOT NULL,
            mask_filename TEXT NOT NULL,
            mask_path TEXT NOT NULL,
            upload_date TEXT NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now')),
            file_size INTEGER,
            image_width INTEGER,
            image_height INTEGER
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_image_pairs_upload_date ON image_pairs(upload_date)",
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Checks that `image_pairs` exists and has every column the repository reads.
///
/// Column order is irrelevant; rows are mapped by name.
pub async fn verify_schema(pool: &SqlitePool) -> Result<(), RepositoryError> {
    let rows = sqlx::query("PRAGMA table_info(image_pairs)")
        .fetch_all(pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    if rows.is_empty() {
        return Err(RepositoryError::Schema(
            "table `image_pairs` does not exist".to_string(),
        ));
    }

    let present: Vec<String> = rows
        .iter()
        .map(|row| row.try_get::<String, _>("name"))
        .collect::<Result<_, _>>()
        .map_err(|e| RepositoryError::Schema(e.to_string()))?;

    let missing: Vec<&str> = IMAGE_PAIR_COLUMNS
        .iter()
        .copied()
        .filter(|col| !present.iter().any(|p| p == col))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(RepositoryError::Schema(format!(
            "table `image_pairs` is missing column(s): {}",
            missing.join(", ")
        )))
    }
}
