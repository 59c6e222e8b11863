pub mod artifact;
pub mod resource;
pub mod schema;
pub mod template;

pub use crate::domain::DomainError;
pub use artifact::{ArtifactKind, ArtifactSet, GeneratedArtifact, OutputLayout};
pub use resource::ResourceDescriptor;
pub use schema::{ColumnMetadata, ForeignKeyMetadata, TableSchema};
pub use template::RenderContext;
