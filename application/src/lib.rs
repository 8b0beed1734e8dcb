//! Application layer for multismtp
//!
//! This crate contains the sender-resolution use case and the port
//! definitions for the external collaborators (type registry, content store,
//! settings store). It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    content_store::ContentStore, settings_store::SettingsStore, type_registry::TypeRegistry,
};
pub use use_cases::resolve_sender::{SenderConfigResolver, SenderMap};
