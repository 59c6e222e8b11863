//! Application layer errors.
//!
//! These errors represent failures in orchestration and in the outside
//! world (catalog, filesystem), not rule violations. Rule violations are
//! `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The catalog has no such table.
    #[error("Table '{table}' not found in database")]
    TableNotFound { table: String },

    /// A target artifact already exists; nothing was overwritten.
    #[error("{path} already exists")]
    ArtifactExists { path: PathBuf },

    /// The wiring file to register routes in does not exist.
    #[error("Application file not found at {path}")]
    WiringFileMissing { path: PathBuf },

    /// The catalog could not be reached or a metadata query failed.
    #[error("Database catalog unavailable: {reason}")]
    CatalogUnavailable { reason: String },

    /// Template rendering failed.
    #[error("Template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Adapter state lock poisoned.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,

    /// Rollback failed (best-effort cleanup failed).
    #[error("Rollback failed for {path}: {reason}")]
    RollbackFailed { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TableNotFound { table } => vec![
                format!("The table '{}' must exist before generating", table),
                "Resource names are singular: 'product' reads table 'products'".into(),
                "Check the database name with --database or DB_NAME".into(),
            ],
            Self::ArtifactExists { path } => vec![
                format!("Refusing to overwrite {}", path.display()),
                "Delete or rename the existing file and run the command again".into(),
                "Use --dry-run to preview what would be generated".into(),
            ],
            Self::WiringFileMissing { path } => vec![
                format!("Expected the Express application file at {}", path.display()),
                "Point to it with --app-path".into(),
                "Or register into a route manifest with --manifest".into(),
            ],
            Self::CatalogUnavailable { .. } => vec![
                "Check that the MySQL server is running and reachable".into(),
                "Verify --host/--port/--user/--password or DB_HOST/DB_PORT/DB_USER/DB_PASSWORD"
                    .into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TableNotFound { .. } => ErrorCategory::NotFound,
            Self::ArtifactExists { .. } => ErrorCategory::Conflict,
            Self::WiringFileMissing { .. } => ErrorCategory::Precondition,
            Self::CatalogUnavailable { .. } => ErrorCategory::Connectivity,
            Self::FilesystemError { .. } | Self::RollbackFailed { .. } => ErrorCategory::Internal,
            Self::LockPoisoned | Self::RenderingFailed { .. } => ErrorCategory::Internal,
        }
    }
}
