//! Configuration entry entities.
//!
//! [`ConfigEntry`] is the read-only record this crate resolves against.
//! Field values sit behind a three-level path (language variant → positional
//! index → value key) inherited from the content store's storage model;
//! [`ConfigEntry::field_value`] collapses that path into a single total
//! accessor so the nested shape never resurfaces elsewhere.

use super::value_objects::EntryId;
use super::{LANGUAGE_NONE, SENDER_EMAIL_FIELD, VALUE_KEY};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Language-variant field values.
///
/// Maps a variant key (usually [`LANGUAGE_NONE`]) to a list of items, each
/// item a map from value key to a JSON scalar. Only index 0 is ever consulted
/// by the accessor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValues {
    variants: HashMap<String, Vec<HashMap<String, Value>>>,
}

impl FieldValues {
    /// Creates an empty field with no variants.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a field holding one value under the no-language variant and
    /// the default value key.
    pub fn single(value: impl Into<Value>) -> Self {
        let mut item = HashMap::new();
        item.insert(VALUE_KEY.to_string(), value.into());
        let mut variants = HashMap::new();
        variants.insert(LANGUAGE_NONE.to_string(), vec![item]);
        Self { variants }
    }

    /// Adds an item under an explicit variant key.
    pub fn with_item(
        mut self,
        variant: impl Into<String>,
        item: HashMap<String, Value>,
    ) -> Self {
        self.variants.entry(variant.into()).or_default().push(item);
        self
    }

    /// Looks up the value at `variant[0][value_key]`.
    ///
    /// Returns `None` when the variant, the first item, or the value key is
    /// absent. Never errors.
    pub fn value_at(&self, variant: &str, value_key: &str) -> Option<&Value> {
        self.variants
            .get(variant)?
            .first()?
            .get(value_key)
    }
}

/// A configuration entry: one SMTP sending profile.
///
/// Owned by the external content store. This crate never creates, mutates,
/// or deletes stored entries; adapters construct these records when loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigEntry {
    /// Store-assigned identifier.
    pub id: EntryId,
    /// Machine name of the entry's content type.
    pub entry_type: String,
    /// Human-readable title.
    pub title: String,
    /// Named fields, each behind a language-variant value path.
    pub fields: HashMap<String, FieldValues>,
}

impl ConfigEntry {
    /// Creates an entry with no fields.
    pub fn new(
        id: impl Into<EntryId>,
        entry_type: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            entry_type: entry_type.into(),
            title: title.into(),
            fields: HashMap::new(),
        }
    }

    /// Adds a field (builder style).
    pub fn with_field(mut self, name: impl Into<String>, values: FieldValues) -> Self {
        self.fields.insert(name.into(), values);
        self
    }

    /// Adds a single-valued string field under the no-language variant.
    pub fn with_string_field(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_field(name, FieldValues::single(value.into()))
    }

    /// Returns the field's value under the no-language variant, index 0, and
    /// the default value key.
    ///
    /// `None` when the field is missing or the path is absent. This is the
    /// one total primitive every other lookup builds on; callers supply
    /// their own defaults via `unwrap_or`.
    pub fn field_value(&self, name: &str) -> Option<&Value> {
        self.field_value_with_key(name, VALUE_KEY)
    }

    /// Like [`field_value`](Self::field_value) with an explicit value key.
    pub fn field_value_with_key(&self, name: &str, value_key: &str) -> Option<&Value> {
        self.fields.get(name)?.value_at(LANGUAGE_NONE, value_key)
    }

    /// Returns the field's value as a string slice, if it is a JSON string.
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.field_value(name)?.as_str()
    }

    /// Returns the sender email address stored on this entry, if any.
    pub fn sender_email(&self) -> Option<&str> {
        self.field_str(SENDER_EMAIL_FIELD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> ConfigEntry {
        ConfigEntry::new("1", "multismtp_config", "Primary")
            .with_string_field("field_smtp_email", "noreply@example.com")
            .with_field("field_smtp_port", FieldValues::single(465))
    }

    #[test]
    fn test_field_value_present() {
        let e = entry();
        assert_eq!(
            e.field_str("field_smtp_email"),
            Some("noreply@example.com")
        );
        assert_eq!(
            e.field_value("field_smtp_port"),
            Some(&Value::from(465))
        );
    }

    #[test]
    fn test_field_value_missing_field() {
        let e = entry();
        assert_eq!(e.field_value("field_smtp_host"), None);
    }

    #[test]
    fn test_field_value_missing_path() {
        // Field exists but holds no items under the no-language variant.
        let e = ConfigEntry::new("1", "multismtp_config", "Primary")
            .with_field("field_smtp_email", FieldValues::empty());
        assert_eq!(e.field_value("field_smtp_email"), None);

        // Item exists but lacks the requested value key.
        let e = ConfigEntry::new("2", "multismtp_config", "Backup").with_field(
            "field_smtp_email",
            FieldValues::empty().with_item("und", HashMap::new()),
        );
        assert_eq!(e.field_value("field_smtp_email"), None);
    }

    #[test]
    fn test_field_value_with_custom_key() {
        let mut item = HashMap::new();
        item.insert("safe_value".to_string(), Value::from("x@y.com"));
        let e = ConfigEntry::new("1", "multismtp_config", "Primary")
            .with_field("field_smtp_email", FieldValues::empty().with_item("und", item));

        assert_eq!(e.field_value("field_smtp_email"), None);
        assert_eq!(
            e.field_value_with_key("field_smtp_email", "safe_value"),
            Some(&Value::from("x@y.com"))
        );
    }

    #[test]
    fn test_sender_email_convenience() {
        assert_eq!(entry().sender_email(), Some("noreply@example.com"));
        assert_eq!(
            ConfigEntry::new("9", "multismtp_config", "Empty").sender_email(),
            None
        );
    }
}
