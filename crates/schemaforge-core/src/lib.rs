//! schemaforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the schemaforge
//! resource generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         schemaforge-cli (CLI)           │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (GenerateService, RegisterService)    │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Inspector, Filesystem, Renderer, ...)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   schemaforge-adapters (Infrastructure) │
//! │ (MySqlInspector, LocalFilesystem, ...)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ResourceName, TableSchema, wiring)     │
//! │         No I/O                          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use schemaforge_core::prelude::*;
//!
//! let resource = ResourceName::parse("product")?;
//! let service = GenerateService::new(inspector, renderer, filesystem, reporter);
//! service.generate(&resource, &OutputLayout::under("."))?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, GenerateService, RegisterService,
        ports::{ArtifactRenderer, Filesystem, Reporter, SchemaInspector},
    };
    pub use crate::domain::{
        ArtifactKind, ArtifactSet, ColumnMetadata, ForeignKeyMetadata, GeneratedArtifact,
        OutputLayout, RegistrationOutcome, RenderContext, ResourceDescriptor, ResourceName,
        RouteManifest, TableSchema,
    };
    pub use crate::error::{ErrorCategory, ForgeError, ForgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
