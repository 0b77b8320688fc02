//! Image pair service - orchestrates image pair storage operations.
//!
//! The service offers two tiers over the same repository:
//!
//! - `add`, `lookup`, `find`, `recent` and `count` report failures so callers
//!   can tell "not found" apart from "lookup failed".
//! - `insert_image_pair`, `get_image_pair` and `get_recent_image_pairs` keep
//!   the collapsed contract: every failure is logged and degrades to `None`
//!   or an empty list.

use std::sync::Arc;

use crate::domain::{DEFAULT_RECENT_LIMIT, ImageFileInfo, ImagePair, NewImagePair, PairLookup};
use crate::ports::{CoreError, ImagePairRepository};

/// Service for image pair operations.
///
/// Holds no state besides the injected repository; every call is an
/// independent unit of work.
#[derive(Clone)]
pub struct ImagePairService {
    repo: Arc<dyn ImagePairRepository>,
}

impl ImagePairService {
    /// Create a new image pair service with the given repository.
    pub fn new(repo: Arc<dyn ImagePairRepository>) -> Self {
        Self { repo }
    }

    /// Validate and insert a new pair, returning its ID.
    pub async fn add(&self, pair: NewImagePair) -> Result<i64, CoreError> {
        pair.validate()?;
        let id = self.repo.insert(&pair).await?;
        tracing::debug!(
            id,
            original = %pair.original.filename,
            mask = %pair.mask.filename,
            "Stored image pair"
        );
        Ok(id)
    }

    /// Look up a pair by ID without collapsing failures into "absent".
    pub async fn lookup(&self, pair_id: i64) -> PairLookup {
        match self.repo.get_by_id(pair_id).await {
            Ok(Some(pair)) => PairLookup::Found(pair),
            Ok(None) => PairLookup::NotFound,
            Err(e) => PairLookup::Failed(e.to_string()),
        }
    }

    /// Get a pair by ID. `Ok(None)` means no pair has that ID.
    pub async fn find(&self, pair_id: i64) -> Result<Option<ImagePair>, CoreError> {
        self.repo.get_by_id(pair_id).await.map_err(CoreError::from)
    }

    /// List up to `limit` pairs, most recent first.
    pub async fn recent(&self, limit: i64) -> Result<Vec<ImagePair>, CoreError> {
        self.repo.list_recent(limit).await.map_err(CoreError::from)
    }

    /// Count all stored pairs.
    pub async fn count(&self) -> Result<i64, CoreError> {
        self.repo.count().await.map_err(CoreError::from)
    }

    /// Insert a pair, returning `None` on any failure.
    pub async fn insert_image_pair(
        &self,
        original: ImageFileInfo,
        mask: ImageFileInfo,
    ) -> Option<i64> {
        match self.add(NewImagePair::new(original, mask)).await {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::error!(error = %e, "Error inserting image pair");
                None
            }
        }
    }

    /// Get a pair by ID, returning `None` when it is missing or the lookup fails.
    pub async fn get_image_pair(&self, pair_id: i64) -> Option<ImagePair> {
        match self.lookup(pair_id).await {
            PairLookup::Failed(reason) => {
                tracing::error!(pair_id, error = %reason, "Error retrieving image pair");
                None
            }
            other => other.into_option(),
        }
    }

    /// List up to `limit` recent pairs, returning an empty list on failure.
    pub async fn get_recent_image_pairs(&self, limit: i64) -> Vec<ImagePair> {
        self.recent(limit).await.unwrap_or_else(|e| {
            tracing::error!(limit, error = %e, "Error retrieving recent image pairs");
            Vec::new()
        })
    }

    /// List the ten most recent pairs.
    pub async fn get_recent_image_pairs_default(&self) -> Vec<ImagePair> {
        self.get_recent_image_pairs(DEFAULT_RECENT_LIMIT).await
    }
}
