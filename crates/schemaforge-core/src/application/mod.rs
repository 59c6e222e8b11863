//! Application layer for schemaforge.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerateService, RegisterService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{GenerateService, RegisterService};

// Re-export port traits (for adapter implementation)
pub use ports::{ArtifactRenderer, Filesystem, Reporter, SchemaInspector};

pub use error::ApplicationError;
