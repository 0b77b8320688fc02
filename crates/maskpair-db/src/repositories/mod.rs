//! Repository implementations using `SQLite`.
//!
//! These implementations encapsulate all SQL queries and database access.
//! The `SqlitePool` is confined to this module and never exposed through
//! the port trait signatures.

mod row_mappers;
mod sqlite_image_pair_repository;

pub use row_mappers::{IMAGE_PAIR_COLUMNS, IMAGE_PAIR_SELECT_COLUMNS};
pub use sqlite_image_pair_repository::SqliteImagePairRepository;
