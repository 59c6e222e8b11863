//! Error handling for the schemaforge CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//!
//! Every failure exits with status 1; the category only drives styling and
//! log severity.

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use schemaforge_core::error::ForgeError;

pub use schemaforge_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// A value clap accepted but the domain rejects, such as a resource name.
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file or variable could not be read or parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `schemaforge-core` or an adapter.
    #[error("{0}")]
    Core(#[from] ForgeError),

    // ── System errors ──────────────────────────────────────────────────────
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Wrap a rejected argument value, keeping the original as the source.
    pub fn invalid_input<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        CliError::InvalidInput {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message, .. } => vec![
                format!("Check your input: {message}"),
                "Use --help for usage information".into(),
            ],

            Self::ConfigError { .. } => vec![
                format!(
                    "Check your config file at {}",
                    crate::config::AppConfig::config_path().display()
                ),
                format!(
                    "or {} in the current directory",
                    crate::config::LOCAL_CONFIG_FILE
                ),
                "DB_PORT and DB_CONNECT_TIMEOUT must be whole numbers".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
        }
    }

    /// Category used for styling and log severity.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation
                | CoreCategory::Conflict
                | CoreCategory::Precondition => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Connectivity => ErrorCategory::Environment,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS. Always 1.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "\u{2717}".red().bold(), // ✗
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "\u{2192}".dimmed(), // →
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`].
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {self}\n"));

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Environment => tracing::error!("Database error: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad input, conflicting files, missing app.js.
    UserError,
    /// Table not found.
    NotFound,
    /// Database unreachable or rejecting queries.
    Environment,
    Configuration,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    use schemaforge_core::application::ApplicationError;
    use schemaforge_core::domain::ResourceName;

    fn core(err: ApplicationError) -> CliError {
        CliError::Core(ForgeError::Application(err))
    }

    #[test]
    fn core_message_is_passed_through() {
        let err = core(ApplicationError::TableNotFound {
            table: "widgets".into(),
        });
        assert_eq!(err.to_string(), "Table 'widgets' not found in database");
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn every_error_exits_with_one() {
        let errors = [
            CliError::InvalidInput {
                message: "x".into(),
                source: None,
            },
            CliError::ConfigError {
                message: "x".into(),
                source: None,
            },
            core(ApplicationError::ArtifactExists {
                path: "routes/product.routes.js".into(),
            }),
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            },
        ];
        for err in errors {
            assert_eq!(err.exit_code(), 1, "{err}");
        }
    }

    #[test]
    fn connectivity_maps_to_environment() {
        let err = core(ApplicationError::CatalogUnavailable {
            reason: "connection refused".into(),
        });
        assert_eq!(err.category(), ErrorCategory::Environment);
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn format_plain_contains_error_header() {
        let err = core(ApplicationError::WiringFileMissing {
            path: "app.js".into(),
        });
        let s = err.format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_cause() {
        let err = CliError::IoError {
            message: "reading app.js".into(),
            source: io::Error::other("permission denied"),
        };
        let s = err.format_plain(true);
        assert!(s.contains("Caused by: permission denied"));
        assert!(!s.contains("Use --verbose"));
    }

    #[test]
    fn invalid_name_keeps_domain_message() {
        let domain = ResourceName::parse("9lives").unwrap_err();
        let err = CliError::invalid_input(domain);

        assert_eq!(err.category(), ErrorCategory::UserError);
        assert!(err.to_string().starts_with("Invalid input: Invalid resource name '9lives'"));
        assert!(err.format_plain(true).contains("Caused by: Invalid resource name"));
    }
}
