//! Sender configuration resolution use case.
//!
//! [`SenderConfigResolver`] maps a sender email address to the configuration
//! entry that should be used to send mail, falling back to an
//! operator-chosen default entry when no match exists.
//!
//! Every operation is stateless and idempotent for a fixed store snapshot:
//! nothing is cached, and the sender map is rebuilt from current store state
//! on every call.

use crate::ports::content_store::ContentStore;
use crate::ports::settings_store::SettingsStore;
use crate::ports::type_registry::TypeRegistry;
use multismtp_domain::{
    ConfigEntry, EntryId, ResolverError, CONFIG_ENTRY_TYPE, DEFAULT_ENTRY_SETTING,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Mapping from sender email to display label (`"<email> - (<title>)"`).
pub type SenderMap = BTreeMap<String, String>;

/// Use case for resolving SMTP sender configuration entries.
///
/// Holds the three injected ports and performs read-only queries against
/// them. Safe for concurrent callers: there is no use-case-local mutable
/// state.
pub struct SenderConfigResolver {
    store: Arc<dyn ContentStore>,
    registry: Arc<dyn TypeRegistry>,
    settings: Arc<dyn SettingsStore>,
}

impl Clone for SenderConfigResolver {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            registry: self.registry.clone(),
            settings: self.settings.clone(),
        }
    }
}

impl SenderConfigResolver {
    pub fn new(
        store: Arc<dyn ContentStore>,
        registry: Arc<dyn TypeRegistry>,
        settings: Arc<dyn SettingsStore>,
    ) -> Self {
        Self {
            store,
            registry,
            settings,
        }
    }

    /// Returns the recognized configuration type identifier if the host has
    /// it registered, `None` otherwise. Pure lookup, no side effects.
    pub fn config_type_identifier(&self) -> Option<&'static str> {
        self.registry
            .registered_type_names()
            .contains(CONFIG_ENTRY_TYPE)
            .then_some(CONFIG_ENTRY_TYPE)
    }

    /// Lists `(id, title)` pairs for all configuration entries.
    ///
    /// Empty when the configuration type is not registered. Order is
    /// whatever the store yields; no sort is defined.
    pub fn list_config_entries(&self) -> Vec<(EntryId, String)> {
        match self.config_type_identifier() {
            Some(entry_type) => self.store.query_by_type(entry_type),
            None => Vec::new(),
        }
    }

    /// Builds the sender map: every configuration entry with a non-empty
    /// sender email contributes `email → "<email> - (<title>)"`.
    ///
    /// Entries without an email are silently skipped. The caller-supplied
    /// `extras` are merged last, so they override entries with the same
    /// email key. No failure modes; an unregistered type yields the extras
    /// alone.
    pub fn senders_with_labels(&self, extras: SenderMap) -> SenderMap {
        let mut senders = SenderMap::new();
        if let Some(entry_type) = self.config_type_identifier() {
            for entry in self.store.load_all_by_type(entry_type) {
                match entry.sender_email() {
                    Some(email) if !email.is_empty() => {
                        senders.insert(
                            email.to_string(),
                            format!("{} - ({})", email, entry.title),
                        );
                    }
                    _ => {}
                }
            }
        }
        senders.extend(extras);
        senders
    }

    /// Resolves the configuration entry for a sender email.
    ///
    /// Scans all configuration entries in store order, comparing each
    /// entry's extracted email (missing email compares as `""`) to `sender`
    /// by exact case-sensitive equality; the first match wins. When nothing
    /// matches, falls back to the entry named by the
    /// `default-config-entry-id` setting.
    ///
    /// # Errors
    ///
    /// Not-found when the store holds zero configuration entries (checked
    /// before any comparison), or when the default entry id is unset or
    /// invalid. Type-mismatch when the default id names an entry of another
    /// type.
    pub fn resolve_entry_by_email(&self, sender: &str) -> Result<ConfigEntry, ResolverError> {
        let entries = self.store.load_all_by_type(CONFIG_ENTRY_TYPE);
        if entries.is_empty() {
            return Err(ResolverError::not_found(format!(
                "no entries of type '{}' exist",
                CONFIG_ENTRY_TYPE
            )));
        }

        for entry in entries {
            if entry.sender_email().unwrap_or("") == sender {
                return Ok(entry);
            }
        }

        debug!(sender, "no configuration matches sender, using default entry");
        let default_id = self
            .settings
            .setting(DEFAULT_ENTRY_SETTING)
            .ok_or_else(|| {
                ResolverError::not_found(format!(
                    "setting '{}' is not configured",
                    DEFAULT_ENTRY_SETTING
                ))
            })?;
        self.load_entry_by_id(&EntryId::new(default_id))
    }

    /// Loads a configuration entry by id.
    ///
    /// # Errors
    ///
    /// Not-found when no entry exists for `id`; type-mismatch when the entry
    /// is not of the recognized configuration type.
    pub fn load_entry_by_id(&self, id: &EntryId) -> Result<ConfigEntry, ResolverError> {
        let entry = self
            .store
            .load_by_id(id)
            .ok_or_else(|| ResolverError::not_found(format!("no entry with id '{}'", id)))?;
        if entry.entry_type != CONFIG_ENTRY_TYPE {
            return Err(ResolverError::TypeMismatch {
                id: id.clone(),
                expected: CONFIG_ENTRY_TYPE.to_string(),
                actual: entry.entry_type,
            });
        }
        Ok(entry)
    }
}
