//! Configuration entry types and the field-value accessor.

pub mod entities;
pub mod value_objects;

/// Machine name of the recognized configuration entry type.
pub const CONFIG_ENTRY_TYPE: &str = "multismtp_config";

/// Name of the field holding the sender email address.
pub const SENDER_EMAIL_FIELD: &str = "field_smtp_email";

/// Language-variant key for values stored without a language.
pub const LANGUAGE_NONE: &str = "und";

/// Default value key within a field item.
pub const VALUE_KEY: &str = "value";

/// Settings key naming the fallback entry used when no sender matches.
pub const DEFAULT_ENTRY_SETTING: &str = "default-config-entry-id";
