//! Composition utilities for building services with `SQLite` backends.
//!
//! This module provides factory functions for wiring up the application
//! with `SQLite` repositories. It is focused purely on construction and
//! should not contain any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use maskpair_core::ImagePairService;

use crate::repositories::SqliteImagePairRepository;

/// Factory for creating repository instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Create an in-memory `SQLite` pool for testing.
    pub async fn create_test_pool() -> anyhow::Result<SqlitePool> {
        let pool = SqlitePool::connect("sqlite::memory:").await?;
        Ok(pool)
    }

    /// Create an image pair repository from a pool.
    pub fn image_pair_repository(pool: SqlitePool) -> Arc<SqliteImagePairRepository> {
        Arc::new(SqliteImagePairRepository::new(pool))
    }

    /// Build the image pair service on top of a pool.
    ///
    /// This is the recommended single-step way for adapters to obtain
    /// a fully composed service.
    ///
    /// ```ignore
    /// let pool = setup_database(&db_path).await?;
    /// let service = CoreFactory::build_service(pool);
    /// let recent = service.get_recent_image_pairs_default().await;
    /// ```
    pub fn build_service(pool: SqlitePool) -> ImagePairService {
        ImagePairService::new(Self::image_pair_repository(pool))
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema applied.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get the underlying pool.
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create an image pair repository using this test database.
    pub fn repository(&self) -> SqliteImagePairRepository {
        SqliteImagePairRepository::new(self.pool.clone())
    }

    /// Create a fully wired service using this test database.
    pub fn service(&self) -> ImagePairService {
        CoreFactory::build_service(self.pool.clone())
    }
}
