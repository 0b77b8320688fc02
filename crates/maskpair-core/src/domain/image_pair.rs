//! Image pair domain types.
//!
//! An image pair associates an uploaded original image with the mask that
//! was drawn over it, plus optional size and dimension metadata taken from
//! the original.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ports::CoreError;

/// Number of pairs returned by a recent-pairs listing when no limit is given.
pub const DEFAULT_RECENT_LIMIT: i64 = 10;

/// Description of one uploaded image file.
///
/// `filename` and `path` are required. The numeric fields are independently
/// optional and are only persisted for the original image of a pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageFileInfo {
    pub filename: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
}

impl ImageFileInfo {
    /// Create an info record with only the required fields set.
    pub fn new(filename: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            path: path.into(),
            file_size: None,
            width: None,
            height: None,
        }
    }

    /// Set the file size in bytes.
    #[must_use]
    pub fn with_file_size(mut self, bytes: i64) -> Self {
        self.file_size = Some(bytes);
        self
    }

    /// Set the pixel dimensions.
    #[must_use]
    pub fn with_dimensions(mut self, width: i64, height: i64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }
}

/// Data for creating a new image pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewImagePair {
    pub original: ImageFileInfo,
    /// Only `filename` and `path` are stored for the mask.
    pub mask: ImageFileInfo,
}

impl NewImagePair {
    pub const fn new(original: ImageFileInfo, mask: ImageFileInfo) -> Self {
        Self { original, mask }
    }

    /// Check that every required field is present and numeric metadata is sane.
    ///
    /// A blank filename or path is treated as missing.
    pub fn validate(&self) -> Result<(), CoreError> {
        let required = [
            ("original filename", &self.original.filename),
            ("original path", &self.original.path),
            ("mask filename", &self.mask.filename),
            ("mask path", &self.mask.path),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(CoreError::Validation(format!("{field} is required")));
            }
        }

        let numeric = [
            ("file size", self.original.file_size),
            ("width", self.original.width),
            ("height", self.original.height),
        ];
        for (field, value) in numeric {
            if let Some(v) = value {
                if v < 0 {
                    return Err(CoreError::Validation(format!(
                        "{field} must not be negative (got {v})"
                    )));
                }
            }
        }

        Ok(())
    }
}

/// A stored image pair.
///
/// `id` and `upload_date` are assigned by the database on insert and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePair {
    pub id: i64,
    pub original_filename: String,
    pub original_path: String,
    pub mask_filename: String,
    pub mask_path: String,
    pub upload_date: DateTime<Utc>,
    pub file_size: Option<i64>,
    #[serde(rename = "width")]
    pub image_width: Option<i64>,
    #[serde(rename = "height")]
    pub image_height: Option<i64>,
}

impl ImagePair {
    /// Dimensions as `(width, height)` when both are known.
    pub const fn dimensions(&self) -> Option<(i64, i64)> {
        match (self.image_width, self.image_height) {
            (Some(w), Some(h)) => Some((w, h)),
            _ => None,
        }
    }
}
