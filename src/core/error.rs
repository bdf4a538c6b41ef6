//! Error handling for kubegen
//!
//! The error system follows two rules:
//! 1. **Strongly-typed errors** so callers can match on precise failure modes
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! - [`KubegenError`] - Enumerated error types for every failure in a scaffold request
//! - [`ErrorContext`] - Wrapper that adds user-friendly messages and suggestions
//!
//! Parsing and resolution errors are one-shot: a scaffold request is a
//! deterministic computation, so retrying with the same input always reproduces
//! the same error. Nothing is written to disk before resolution fully succeeds.
//!
//! # Examples
//!
//! ```rust,no_run
//! use kubegen_cli::core::{KubegenError, user_friendly_error};
//!
//! let error = KubegenError::EmptyImportPath {
//!     input: "=rbacv1".to_string(),
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for kubegen operations.
///
/// # Error Categories
///
/// ## Custom import parsing
/// - [`EmptyImportPath`] - no path before the `=` separator
/// - [`EmptyImportIdentifier`] - a single `=` with nothing after it
///
/// ## Generation
/// - [`AlreadyExists`] - the destination file is already present
/// - [`InvalidResource`] - the API version or kind failed validation
/// - [`TemplateError`] - the template engine rejected the render context
///
/// ## Environment
/// - [`ConfigError`] - project configuration could not be discovered
/// - [`FileSystemError`] / [`IoError`] - file system failures
/// - [`TomlError`] - malformed `kubegen.toml`
///
/// [`EmptyImportPath`]: KubegenError::EmptyImportPath
/// [`EmptyImportIdentifier`]: KubegenError::EmptyImportIdentifier
/// [`AlreadyExists`]: KubegenError::AlreadyExists
/// [`InvalidResource`]: KubegenError::InvalidResource
/// [`TemplateError`]: KubegenError::TemplateError
/// [`ConfigError`]: KubegenError::ConfigError
/// [`FileSystemError`]: KubegenError::FileSystemError
/// [`IoError`]: KubegenError::IoError
/// [`TomlError`]: KubegenError::TomlError
#[derive(Error, Debug)]
pub enum KubegenError {
    /// The custom import string has no non-whitespace path segment.
    #[error("custom import \"{input}\" path is empty")]
    EmptyImportPath {
        /// The exact string the caller passed
        input: String,
    },

    /// The custom import string has a single `=` followed by nothing.
    #[error("custom import \"{input}\" identifier is empty, remove \"=\" from passed string")]
    EmptyImportIdentifier {
        /// The exact string the caller passed
        input: String,
    },

    /// Destination file already present
    #[error("{path} already exists")]
    AlreadyExists {
        /// Path that is occupied
        path: String,
    },

    /// Resource descriptor validation failed
    #[error("Invalid resource: {reason}")]
    InvalidResource {
        /// Why the API version or kind was rejected
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Template rendering failed
    #[error("Template error: {message}")]
    TemplateError {
        /// Rendering failure as reported by the template engine
        message: String,
    },

    /// File system error
    #[error("File system error: {operation}")]
    FileSystemError {
        /// The file system operation that failed
        operation: String,
        /// Path where the file system error occurred
        path: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Generic error for cases not covered by specific variants
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

impl Clone for KubegenError {
    fn clone(&self) -> Self {
        match self {
            Self::EmptyImportPath {
                input,
            } => Self::EmptyImportPath {
                input: input.clone(),
            },
            Self::EmptyImportIdentifier {
                input,
            } => Self::EmptyImportIdentifier {
                input: input.clone(),
            },
            Self::AlreadyExists {
                path,
            } => Self::AlreadyExists {
                path: path.clone(),
            },
            Self::InvalidResource {
                reason,
            } => Self::InvalidResource {
                reason: reason.clone(),
            },
            Self::ConfigError {
                message,
            } => Self::ConfigError {
                message: message.clone(),
            },
            Self::TemplateError {
                message,
            } => Self::TemplateError {
                message: message.clone(),
            },
            Self::FileSystemError {
                operation,
                path,
            } => Self::FileSystemError {
                operation: operation.clone(),
                path: path.clone(),
            },
            // io::Error and toml errors aren't Clone
            Self::IoError(e) => Self::Other {
                message: format!("IO error: {e}"),
            },
            Self::TomlError(e) => Self::Other {
                message: format!("TOML parsing error: {e}"),
            },
            Self::Other {
                message,
            } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// Error context wrapper that provides user-friendly error information.
///
/// Wraps a [`KubegenError`] with an optional suggestion and details so the CLI
/// can print something actionable instead of a bare message.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: KubegenError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: KubegenError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors
    ///
    /// - Error message: Red and bold
    /// - Details: Yellow
    /// - Suggestion: Green
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] with suggestions.
///
/// Known [`KubegenError`]s anywhere in the `anyhow` chain get tailored advice;
/// I/O errors are classified by kind; anything else keeps its full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    for cause in error.chain() {
        if let Some(kubegen_error) = cause.downcast_ref::<KubegenError>() {
            return create_error_context(kubegen_error.clone());
        }
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        // The context messages name the path; the io::Error itself does not
        let details = format!("{error:#}");
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(KubegenError::FileSystemError {
                    operation: "permission denied".to_string(),
                    path: error.to_string(),
                })
                .with_details(details)
                .with_suggestion("Check file ownership and permissions of the project directory");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(KubegenError::FileSystemError {
                    operation: "not found".to_string(),
                    path: error.to_string(),
                })
                .with_details(details)
                .with_suggestion("Check that the file or directory exists and the path is correct");
            }
            _ => {}
        }
    }

    let mut message = error.to_string();
    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(KubegenError::Other {
        message,
    })
}

fn create_error_context(error: KubegenError) -> ErrorContext {
    match &error {
        KubegenError::EmptyImportPath {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Pass the import as 'path' or 'path=identifier', e.g. 'k8s.io/api/rbac/v1=rbacv1'"),

        KubegenError::EmptyImportIdentifier {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Either supply an identifier after '=' or drop the '=' to derive one from the path")
            .with_details("Without '=' the identifier is the last two path segments joined and lower-cased"),

        KubegenError::AlreadyExists {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Remove the existing file or pass --path to write the controller elsewhere")
            .with_details("Generated files are never overwritten"),

        KubegenError::InvalidResource {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Use --api-version <group>/<version> (e.g. app.example.com/v1alpha1) and an UpperCamelCase --kind"),

        KubegenError::ConfigError {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Run from a directory containing go.mod, or add kubegen.toml with repo = \"<module path>\""),

        KubegenError::TemplateError {
            ..
        } => ErrorContext::new(error)
            .with_details("The controller template could not be rendered against the resolved context"),

        _ => ErrorContext::new(error),
    }
}
