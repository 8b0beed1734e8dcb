//! Settings store port.

/// Port over the host's key-value settings.
///
/// Only string settings are consumed here; callers apply their own defaults
/// when a key is unset.
pub trait SettingsStore: Send + Sync {
    /// The value stored under `key`, if any.
    fn setting(&self, key: &str) -> Option<String>;
}
