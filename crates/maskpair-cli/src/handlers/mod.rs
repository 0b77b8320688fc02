//! Command handlers.
//!
//! Each handler takes the composed `CliContext`, performs one operation
//! through `ImagePairService`, prints the result and returns it so callers
//! and tests can inspect it.

pub mod add;
pub mod paths;
pub mod recent;
pub mod show;
