//! In-memory store adapter.

use multismtp_application::{ContentStore, SettingsStore, TypeRegistry};
use multismtp_domain::{ConfigEntry, EntryId, CONFIG_ENTRY_TYPE};
use std::collections::{HashMap, HashSet};

/// In-process adapter implementing all three ports over plain collections.
///
/// Entries are yielded in insertion order; nothing is sorted. The store is
/// immutable after construction, so `&self` queries are safe for concurrent
/// callers.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    types: HashSet<String>,
    entries: Vec<ConfigEntry>,
    settings: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store with no registered types.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with the configuration type pre-registered.
    pub fn with_config_type() -> Self {
        Self::new().with_type(CONFIG_ENTRY_TYPE)
    }

    /// Registers a content-type name.
    pub fn with_type(mut self, name: impl Into<String>) -> Self {
        self.types.insert(name.into());
        self
    }

    /// Appends an entry, preserving insertion order.
    pub fn with_entry(mut self, entry: ConfigEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Stores a settings key-value pair.
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }
}

impl TypeRegistry for MemoryStore {
    fn registered_type_names(&self) -> HashSet<String> {
        self.types.clone()
    }
}

impl ContentStore for MemoryStore {
    fn query_by_type(&self, entry_type: &str) -> Vec<(EntryId, String)> {
        self.entries
            .iter()
            .filter(|e| e.entry_type == entry_type)
            .map(|e| (e.id.clone(), e.title.clone()))
            .collect()
    }

    fn load_by_id(&self, id: &EntryId) -> Option<ConfigEntry> {
        self.entries.iter().find(|e| &e.id == id).cloned()
    }

    fn load_all_by_type(&self, entry_type: &str) -> Vec<ConfigEntry> {
        self.entries
            .iter()
            .filter(|e| e.entry_type == entry_type)
            .cloned()
            .collect()
    }
}

impl SettingsStore for MemoryStore {
    fn setting(&self, key: &str) -> Option<String> {
        self.settings.get(key).cloned()
    }
}
