// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for schemaforge.
//!
//! This module contains pure logic with no I/O. Catalog access, file
//! writing and template bodies are handled via ports (traits) defined in
//! the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or database calls
//! - **Small dependency surface**: std + thiserror, serde, regex
//! - **Immutable entities**: descriptors and artifacts are built once
//!
// Public API - what the world sees
pub mod documentation;
pub mod entities;
pub mod error;
pub mod manifest;
pub mod value_objects;
pub mod wiring;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    artifact::{ArtifactKind, ArtifactSet, GeneratedArtifact, OutputLayout},
    resource::{ResourceDescriptor, USER_ID_COLUMN},
    schema::{ColumnMetadata, ForeignKeyMetadata, TableSchema},
    template::RenderContext,
};

pub use documentation::{DocumentationSchema, DocumentedField, infer_doc_type};
pub use error::{DomainError, ErrorCategory};
pub use manifest::{RouteEntry, RouteManifest};
pub use validation::DomainValidator;
pub use value_objects::{DocExample, DocType, ResourceName};
pub use wiring::{RegistrationOutcome, Splice, splice_registration};
