//! Content store port.

use multismtp_domain::{ConfigEntry, EntryId};

/// Port over the host's content store.
///
/// The store owns all entries; this module only reads. No ordering is
/// guaranteed by the contract — adapters yield entries in whatever order
/// their backing storage produces.
pub trait ContentStore: Send + Sync {
    /// All `(id, title)` pairs for entries of the given type, in store order.
    fn query_by_type(&self, entry_type: &str) -> Vec<(EntryId, String)>;

    /// Loads a single entry by id, if it exists.
    fn load_by_id(&self, id: &EntryId) -> Option<ConfigEntry>;

    /// Loads every entry of the given type, in store order.
    fn load_all_by_type(&self, entry_type: &str) -> Vec<ConfigEntry>;
}
