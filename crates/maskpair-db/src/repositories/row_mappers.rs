//! Row mapping helpers for `SQLite` queries.
//!
//! Columns are always read by name, so a reordered table still maps
//! correctly and a missing column fails loudly instead of shifting values.

use chrono::{DateTime, NaiveDateTime, Utc};
use maskpair_core::{ImagePair, RepositoryError};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

/// Columns the repository reads from `image_pairs`.
pub const IMAGE_PAIR_COLUMNS: [&str; 9] = [
    "id",
    "original_filename",
    "original_path",
    "mask_filename",
    "mask_path",
    "upload_date",
    "file_size",
    "image_width",
    "image_height",
];

/// Shared SELECT column list for image pair queries.
pub const IMAGE_PAIR_SELECT_COLUMNS: &str = "id, original_filename, original_path, mask_filename, mask_path, upload_date, file_size, image_width, image_height";

/// Parse an `SQLite` timestamp.
///
/// Accepts `CURRENT_TIMESTAMP` output, the millisecond form written by the
/// schema default, and an optional " UTC" suffix. Listing sorts the raw text,
/// so other layouts (RFC 3339 included) are rejected rather than misordered.
pub fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    let trimmed = s.trim().trim_end_matches(" UTC");
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f")
        .map(|dt| DateTime::<Utc>::from_naive_utc_and_offset(dt, Utc))
        .ok()
}

fn column<'r, T>(row: &'r SqliteRow, name: &str) -> Result<T, RepositoryError>
where
    T: sqlx::Decode<'r, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite>,
{
    row.try_get(name)
        .map_err(|e| RepositoryError::Mapping(format!("column `{name}`: {e}")))
}

/// Parse a database row into an `ImagePair`.
pub fn row_to_image_pair(row: &SqliteRow) -> Result<ImagePair, RepositoryError> {
    let upload_date_str: String = column(row, "upload_date")?;
    let upload_date = parse_datetime(&upload_date_str).ok_or_else(|| {
        RepositoryError::Mapping(format!("unparseable upload_date: {upload_date_str:?}"))
    })?;

    Ok(ImagePair {
        id: column(row, "id")?,
        original_filename: column(row, "original_filename")?,
        original_path: column(row, "original_path")?,
        mask_filename: column(row, "mask_filename")?,
        mask_path: column(row, "mask_path")?,
        upload_date,
        file_size: column(row, "file_size")?,
        image_width: column(row, "image_width")?,
        image_height: column(row, "image_height")?,
    })
}
