// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid resource name '{name}': {reason}")]
    InvalidResourceName { name: String, reason: String },

    #[error("Invalid column metadata: {0}")]
    InvalidColumn(String),

    #[error("Duplicate artifact path: {path}")]
    DuplicatePath { path: String },

    #[error("Artifact set is empty")]
    EmptyArtifactSet,

    // ========================================================================
    // Wiring Errors
    // ========================================================================
    #[error("Route manifest is malformed: {reason}")]
    MalformedManifest { reason: String },

    #[error("Unsupported route manifest version {found} (expected {expected})")]
    UnsupportedManifestVersion { found: u32, expected: u32 },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidResourceName { name, reason } => vec![
                format!("'{}' cannot be used as a resource name: {}", name, reason),
                "Use the singular table name without its trailing 's'".into(),
                "Example: schemaforge generate route product  (table 'products')".into(),
            ],
            Self::MalformedManifest { .. } | Self::UnsupportedManifestVersion { .. } => vec![
                "The route manifest could not be understood".into(),
                "Fix or delete the manifest file and register the routes again".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidResourceName { .. } | Self::InvalidColumn(_) => ErrorCategory::Validation,
            Self::MalformedManifest { .. } | Self::UnsupportedManifestVersion { .. } => {
                ErrorCategory::Precondition
            }
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Precondition,
    Internal,
}
