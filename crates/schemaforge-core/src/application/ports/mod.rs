//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `schemaforge-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `SchemaInspector`: Database catalog metadata
//!   - `Filesystem`: File operations
//!   - `ArtifactRenderer`: Source generation
//!   - `Reporter`: Progress messages
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{ArtifactRenderer, Filesystem, Reporter, SchemaInspector};

#[cfg(test)]
pub use output::{MockArtifactRenderer, MockFilesystem, MockReporter, MockSchemaInspector};
