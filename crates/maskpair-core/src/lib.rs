#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{DEFAULT_RECENT_LIMIT, ImageFileInfo, ImagePair, NewImagePair, PairLookup};
pub use ports::{CoreError, ImagePairRepository, RepositoryError};
pub use services::ImagePairService;

// Re-export path utilities
pub use paths::{PathError, ResolvedPaths, data_root, database_path};

// Silence unused dev-dependency warning: maskpair-db backs the tests in `tests/`
#[cfg(test)]
use maskpair_db as _;
