//! Domain layer for multismtp
//!
//! This crate contains the core entities and value objects for SMTP sender
//! configuration lookup. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Configuration entry
//!
//! A [`ConfigEntry`] is a content record representing one SMTP sending
//! profile. Entries are owned by an external content store; this crate is a
//! read-only consumer and never creates, mutates, or deletes them.
//!
//! ## Sender email
//!
//! The email address stored under [`SENDER_EMAIL_FIELD`] is the lookup key
//! for outbound mail routing. Field values live behind a language-variant
//! path that is collapsed into a single accessor on [`ConfigEntry`].

pub mod core;
pub mod entry;

// Re-export commonly used types
pub use core::error::ResolverError;
pub use entry::{
    entities::{ConfigEntry, FieldValues},
    value_objects::EntryId,
    CONFIG_ENTRY_TYPE, DEFAULT_ENTRY_SETTING, LANGUAGE_NONE, SENDER_EMAIL_FIELD, VALUE_KEY,
};
