//! `SQLite` implementation of the `ImagePairRepository` trait.

use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::{Row, Sqlite, SqlitePool};

use maskpair_core::{ImagePair, ImagePairRepository, NewImagePair, RepositoryError};

use super::row_mappers::{IMAGE_PAIR_SELECT_COLUMNS, row_to_image_pair};

/// `SQLite` implementation of the `ImagePairRepository` trait.
///
/// The pool plays the connection provider: every method acquires exactly one
/// connection and the guard returns it to the pool when the method exits.
pub struct SqliteImagePairRepository {
    pool: SqlitePool,
}

impl SqliteImagePairRepository {
    /// Create a new `SQLite` image pair repository.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying pool (for testing only).
    #[cfg(test)]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn connection(&self) -> Result<PoolConnection<Sqlite>, RepositoryError> {
        self.pool
            .acquire()
            .await
            .map_err(|e| RepositoryError::ConnectionUnavailable(e.to_string()))
    }
}

fn storage(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Storage(e.to_string())
}

#[async_trait]
impl ImagePairRepository for SqliteImagePairRepository {
    async fn insert(&self, pair: &NewImagePair) -> Result<i64, RepositoryError> {
        let mut conn = self.connection().await?;

        let result = sqlx::query(
            "INSERT INTO image_pairs
             (original_filename, original_path, mask_filename, mask_path,
              file_size, image_width, image_height)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&pair.original.filename)
        .bind(&pair.original.path)
        .bind(&pair.mask.filename)
        .bind(&pair.mask.path)
        .bind(pair.original.file_size)
        .bind(pair.original.width)
        .bind(pair.original.height)
        .execute(&mut *conn)
        .await
        .map_err(storage)?;

        let id = result.last_insert_rowid();
        tracing::debug!(id, "Inserted image pair");
        Ok(id)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<ImagePair>, RepositoryError> {
        let mut conn = self.connection().await?;
        let query = format!("SELECT {IMAGE_PAIR_SELECT_COLUMNS} FROM image_pairs WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(storage)?;

        row.as_ref().map(row_to_image_pair).transpose()
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<ImagePair>, RepositoryError> {
        let mut conn = self.connection().await?;
        // id breaks ties between pairs uploaded within the same millisecond
        let query = format!(
            "SELECT {IMAGE_PAIR_SELECT_COLUMNS} FROM image_pairs
             ORDER BY upload_date DESC, id DESC
             LIMIT ?"
        );

        let rows = sqlx::query(&query)
            .bind(limit)
            .fetch_all(&mut *conn)
            .await
            .map_err(storage)?;

        tracing::debug!(limit, returned = rows.len(), "Listed recent image pairs");
        rows.iter().map(row_to_image_pair).collect()
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let mut conn = self.connection().await?;

        let row = sqlx::query("SELECT COUNT(*) AS count FROM image_pairs")
            .fetch_one(&mut *conn)
            .await
            .map_err(storage)?;

        row.try_get("count")
            .map_err(|e| RepositoryError::Mapping(e.to_string()))
    }
}
