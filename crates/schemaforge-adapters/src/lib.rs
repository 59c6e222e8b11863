//! Infrastructure adapters for schemaforge.
//!
//! This crate implements the ports defined in `schemaforge_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod catalog;
pub mod filesystem;
pub mod renderer;
pub mod reporter;

// Re-export commonly used adapters
pub use catalog::{ConnectionSettings, InMemoryCatalog, MySqlInspector};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::ExpressRenderer;
pub use reporter::MemoryReporter;
