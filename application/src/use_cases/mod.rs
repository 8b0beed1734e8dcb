//! Use cases.

pub mod resolve_sender;
