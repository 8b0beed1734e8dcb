//! Entry domain value objects - immutable identifiers for configuration entries.

use serde::{Deserialize, Serialize};

/// Unique identifier for a configuration entry.
///
/// Identifiers are assigned by the external content store; this crate treats
/// them as opaque strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryId(String);

impl EntryId {
    /// Creates an EntryId from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<T: Into<String>> From<T> for EntryId {
    fn from(s: T) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_id_display() {
        let id = EntryId::new("42");
        assert_eq!(id.to_string(), "42");
        assert_eq!(id.as_str(), "42");
    }

    #[test]
    fn test_entry_id_from_str() {
        let id: EntryId = "primary".into();
        assert_eq!(id, EntryId::new("primary"));
    }
}
