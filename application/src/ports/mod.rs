//! Port definitions for external collaborators.
//!
//! All ports are synchronous and read-only: every operation is a query
//! against state owned by the host, and implementations are expected to be
//! safe for concurrent callers (`Send + Sync`, `&self` receivers).

pub mod content_store;
pub mod settings_store;
pub mod type_registry;
