//! Store file loader

use super::file_document::StoreDocument;
use super::memory::MemoryStore;
use figment::{
    providers::{Format, Serialized, Toml},
    Figment,
};
use std::path::Path;
use tracing::debug;

/// Loads a TOML store document and converts it into a servable store.
pub struct StoreLoader;

impl StoreLoader {
    /// Load a store from a TOML file, merged over empty defaults.
    ///
    /// A missing or malformed file surfaces as a `figment::Error`; an empty
    /// file yields an empty store.
    pub fn load(path: &Path) -> Result<MemoryStore, Box<figment::Error>> {
        let document: StoreDocument = Figment::new()
            .merge(Serialized::defaults(StoreDocument::default()))
            .merge(Toml::file_exact(path))
            .extract()
            .map_err(Box::new)?;

        debug!(
            path = %path.display(),
            entries = document.entries.len(),
            "loaded store document"
        );
        Ok(document.into_store())
    }

    /// Load only the built-in defaults (an empty store).
    pub fn load_defaults() -> MemoryStore {
        StoreDocument::default().into_store()
    }
}
