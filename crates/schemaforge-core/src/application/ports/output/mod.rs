//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `schemaforge-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{ArtifactSet, OutputLayout, ResourceDescriptor, TableSchema};
use crate::error::ForgeResult;

/// Port for reading table metadata from a database catalog.
///
/// Implemented by:
/// - `schemaforge_adapters::catalog::MySqlInspector` (production)
/// - `schemaforge_adapters::catalog::InMemoryCatalog` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait SchemaInspector: Send + Sync {
    /// Columns (in ordinal order) and foreign keys of `table`.
    ///
    /// Returns `Ok(None)` when the table does not exist. A table that exists
    /// but has no columns yields an empty schema, never `None`.
    fn inspect(&self, table: &str) -> ForgeResult<Option<TableSchema>>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `schemaforge_adapters::filesystem::LocalFilesystem` (production)
/// - `schemaforge_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()>;

    /// Create a new file. Fails if anything already exists at `path`.
    fn create_file(&self, path: &Path, content: &str) -> ForgeResult<()>;

    /// Write content to a file, replacing it.
    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()>;

    fn read_to_string(&self, path: &Path) -> ForgeResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    fn remove_file(&self, path: &Path) -> ForgeResult<()>;
}

/// Port for turning a resource into source artifacts.
///
/// Implemented by:
/// - `schemaforge_adapters::renderer::ExpressRenderer` (Express + mysql2)
#[cfg_attr(test, mockall::automock)]
pub trait ArtifactRenderer: Send + Sync {
    fn render(
        &self,
        resource: &ResourceDescriptor,
        layout: &OutputLayout,
    ) -> ForgeResult<ArtifactSet>;
}

/// Port for user-facing progress messages.
///
/// Services report outcomes through this instead of printing, so the CLI
/// decides on styling and tests can capture what was said.
#[cfg_attr(test, mockall::automock)]
pub trait Reporter: Send + Sync {
    fn success(&self, message: &str);
    fn info(&self, message: &str);
    fn warning(&self, message: &str);
}
