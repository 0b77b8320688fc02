//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, filesystem, etc.).
//!
//! # Structure
//!
//! - `image_pair` - Stored pairs and the data needed to create one
//! - `lookup` - Distinguishable outcome of a by-id lookup

mod image_pair;
mod lookup;

pub use image_pair::{DEFAULT_RECENT_LIMIT, ImageFileInfo, ImagePair, NewImagePair};
pub use lookup::PairLookup;
