//! Image pair repository trait definition.
//!
//! This port defines the interface for image pair persistence operations.
//! Implementations must handle all storage details internally, including
//! acquiring and releasing a connection for every call.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{ImagePair, NewImagePair};

/// Repository for image pair persistence operations.
///
/// Each method is a self-contained, single-statement unit of work. There is
/// no update or delete: a pair, once inserted, is only ever read.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - "Not found" is `Ok(None)`, never an error
/// - Failures are reported as `RepositoryError`; degrading them to empty
///   results is the caller's decision
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImagePairRepository: Send + Sync {
    /// Insert a new pair and return its database-assigned ID.
    ///
    /// Only the mask's `filename` and `path` are persisted. Missing optional
    /// metadata is stored as NULL.
    async fn insert(&self, pair: &NewImagePair) -> Result<i64, RepositoryError>;

    /// Get a pair by its database ID.
    async fn get_by_id(&self, id: i64) -> Result<Option<ImagePair>, RepositoryError>;

    /// List pairs ordered by upload date, most recent first.
    ///
    /// `limit` is passed to the database as-is.
    async fn list_recent(&self, limit: i64) -> Result<Vec<ImagePair>, RepositoryError>;

    /// Count all stored pairs.
    async fn count(&self) -> Result<i64, RepositoryError>;
}
