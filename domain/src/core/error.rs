//! Domain error types

use crate::entry::value_objects::EntryId;
use thiserror::Error;

/// Errors raised while resolving configuration entries.
///
/// Exactly two kinds exist. Both are raised immediately to the caller; there
/// is no retry, recovery, or partial result. Field extraction is never an
/// error — a missing field degrades to `None` at the accessor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolverError {
    /// A requested entry, the configured default entry, or any entry of the
    /// recognized type could not be found.
    #[error("configuration entry not found: {reason}")]
    NotFound { reason: String },

    /// An entry loaded by id is not of the recognized configuration type.
    #[error("entry '{id}' has type '{actual}', expected '{expected}'")]
    TypeMismatch {
        id: EntryId,
        expected: String,
        actual: String,
    },
}

impl ResolverError {
    /// Construct the not-found kind from any displayable reason.
    pub fn not_found(reason: impl Into<String>) -> Self {
        ResolverError::NotFound {
            reason: reason.into(),
        }
    }

    /// Check whether this error is the not-found kind.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ResolverError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let error = ResolverError::not_found("no entry with id '7'");
        assert_eq!(
            error.to_string(),
            "configuration entry not found: no entry with id '7'"
        );
    }

    #[test]
    fn test_type_mismatch_display() {
        let error = ResolverError::TypeMismatch {
            id: EntryId::new("7"),
            expected: "multismtp_config".to_string(),
            actual: "article".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "entry '7' has type 'article', expected 'multismtp_config'"
        );
    }

    #[test]
    fn test_is_not_found_check() {
        assert!(ResolverError::not_found("x").is_not_found());
        assert!(!ResolverError::TypeMismatch {
            id: EntryId::new("7"),
            expected: "a".to_string(),
            actual: "b".to_string(),
        }
        .is_not_found());
    }
}
