//! Raw TOML store document types
//!
//! These structs represent the exact structure of a TOML store file. They
//! are deserialized directly and converted into a [`MemoryStore`] for
//! serving queries.
//!
//! Document shape:
//!
//! ```toml
//! types = ["multismtp_config"]
//!
//! [settings]
//! default-config-entry-id = "primary"
//!
//! [[entry]]
//! id = "primary"
//! type = "multismtp_config"
//! title = "Primary"
//!
//! [entry.fields.field_smtp_email]
//! und = [{ value = "noreply@example.com" }]
//! ```

use super::memory::MemoryStore;
use multismtp_domain::{ConfigEntry, FieldValues};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw store document from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreDocument {
    /// Registered content-type machine names.
    pub types: Vec<String>,
    /// Key-value settings (holds the default entry id).
    pub settings: HashMap<String, String>,
    /// Configuration entries, in document order.
    #[serde(rename = "entry")]
    pub entries: Vec<EntryDocument>,
}

/// Raw entry record from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryDocument {
    pub id: String,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub title: String,
    /// Field name → language-variant value table.
    #[serde(default)]
    pub fields: HashMap<String, FieldValues>,
}

impl StoreDocument {
    /// Converts the document into a servable in-memory store, preserving
    /// entry document order.
    pub fn into_store(self) -> MemoryStore {
        let mut store = MemoryStore::new();
        for name in self.types {
            store = store.with_type(name);
        }
        for (key, value) in self.settings {
            store = store.with_setting(key, value);
        }
        for entry in self.entries {
            store = store.with_entry(entry.into_entry());
        }
        store
    }
}

impl EntryDocument {
    fn into_entry(self) -> ConfigEntry {
        let mut entry = ConfigEntry::new(self.id, self.entry_type, self.title);
        for (name, values) in self.fields {
            entry = entry.with_field(name, values);
        }
        entry
    }
}
