//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Repository traits are minimal: create, read and enumerate only

pub mod image_pair_repository;

use thiserror::Error;

use crate::paths::PathError;

pub use image_pair_repository::ImagePairRepository;

#[cfg(test)]
pub use image_pair_repository::MockImagePairRepository;

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No connection could be obtained from the provider.
    #[error("Connection unavailable: {0}")]
    ConnectionUnavailable(String),

    /// The database rejected or failed the executed statement.
    #[error("Storage error: {0}")]
    Storage(String),

    /// A row could not be mapped into a domain record.
    #[error("Row mapping error: {0}")]
    Mapping(String),

    /// The backing table is missing or does not have the expected columns.
    #[error("Schema mismatch: {0}")]
    Schema(String),
}

/// Errors surfaced by core services.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<PathError> for CoreError {
    fn from(err: PathError) -> Self {
        Self::Configuration(err.to_string())
    }
}
