//! Outcome of looking up a single image pair.

use serde::Serialize;

use super::ImagePair;

/// Result of a by-id lookup that keeps "not found" apart from "lookup failed".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum PairLookup {
    Found(ImagePair),
    NotFound,
    /// The lookup could not be completed; carries the reason.
    Failed(String),
}

impl PairLookup {
    /// Collapse to the legacy result where failures read as "absent".
    pub fn into_option(self) -> Option<ImagePair> {
        match self {
            Self::Found(pair) => Some(pair),
            Self::NotFound | Self::Failed(_) => None,
        }
    }

    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_and_not_found_collapse_to_none() {
        assert_eq!(PairLookup::NotFound.into_option(), None);
        assert_eq!(PairLookup::Failed("disk I/O error".into()).into_option(), None);
        assert!(PairLookup::Failed("x".into()).is_failed());
        assert!(!PairLookup::NotFound.is_found());
    }
}
