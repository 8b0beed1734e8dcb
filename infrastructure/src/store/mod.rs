//! Store adapters implementing the application ports.

pub mod file_document;
pub mod loader;
pub mod memory;
