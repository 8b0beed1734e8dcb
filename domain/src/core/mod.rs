//! Core domain types shared across the crate.

pub mod error;
