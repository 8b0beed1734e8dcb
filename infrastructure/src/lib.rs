//! Infrastructure layer for multismtp
//!
//! This crate contains the adapters that satisfy the application-layer
//! ports: an in-memory store for tests and programmatic embedding, and a
//! TOML-file-backed store with a figment-based loader.

pub mod store;

// Re-export commonly used types
pub use store::{
    file_document::{EntryDocument, StoreDocument},
    loader::StoreLoader,
    memory::MemoryStore,
};
