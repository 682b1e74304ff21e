//! Error types for `aacbook`
//!
//! One top-level error that maps onto process exit codes, plus a
//! domain error per subsystem (configuration, chapter content, slide
//! deck, HTTP server).

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `aacbook` CLI operations.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (invalid YAML, validation failure)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Server error (bind failed, listener crashed)
    pub const SERVER_ERROR: i32 = 4;

    /// Chapter content could not be loaded
    pub const CONTENT_ERROR: i32 = 5;

    /// Usage error (invalid arguments, unknown chapter id)
    pub const USAGE_ERROR: i32 = 64;

    /// Interrupted by SIGINT (Ctrl+C)
    pub const INTERRUPTED: i32 = 130;

    /// Terminated by SIGTERM
    pub const TERMINATED: i32 = 143;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `aacbook` operations.
#[derive(Debug, Error)]
pub enum BookError {
    /// Configuration loading or validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Chapter content error
    #[error(transparent)]
    Content(#[from] ContentError),

    /// Slide deck error
    #[error(transparent)]
    Deck(#[from] DeckError),

    /// HTTP server error
    #[error(transparent)]
    Server(#[from] ServerError),

    /// Invalid command-line usage
    #[error("{0}")]
    Usage(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BookError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Json(_) => ExitCode::CONFIG_ERROR,
            Self::Content(_) => ExitCode::CONTENT_ERROR,
            Self::Deck(_) => ExitCode::ERROR,
            Self::Server(_) => ExitCode::SERVER_ERROR,
            Self::Usage(_) => ExitCode::USAGE_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing failed
    #[error("parse error in {path}: {message}")]
    ParseError {
        /// Path to the configuration file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// Configuration validation failed
    #[error("validation failed for {path}: {}", format_issues(.errors))]
    ValidationError {
        /// Path to the configuration file, or `<cli>` for flag input
        path: String,
        /// List of validation issues found
        errors: Vec<ValidationIssue>,
    },

    /// Referenced configuration file not found
    #[error("file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// Field has an invalid value
    #[error("invalid value for '{field}': got '{value}', expected {expected}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The actual value provided
        value: String,
        /// Description of what was expected
        expected: String,
    },
}

fn format_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

// ============================================================================
// Validation Types
// ============================================================================

/// A single validation issue found during configuration validation.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Path to the problematic field (e.g., "docs.url")
    pub path: String,
    /// Description of the validation issue
    pub message: String,
    /// Severity level of the issue
    pub severity: Severity,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {} at {}", prefix, self.message, self.path)
    }
}

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Prevents the configuration from being used
    Error,
    /// Reported, but the configuration is still usable
    Warning,
}

// ============================================================================
// Content Errors
// ============================================================================

/// Failures while fetching chapter markdown.
///
/// Readers only ever see one message for all of these; the variants exist
/// for logs and metrics.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The requested document does not exist in the source
    #[error("document not found: {0}")]
    NotFound(String),

    /// The HTTP origin answered with a non-success status
    #[error("HTTP error! status: {status}")]
    Status {
        /// Status code returned by the origin
        status: u16,
    },

    /// Network-level failure talking to the HTTP origin
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Local filesystem failure
    #[error("I/O error reading {path}: {source}")]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Filename tried to escape the docs root
    #[error("rejected document path: {0}")]
    InvalidPath(String),
}

impl ContentError {
    /// Short label used for metrics and structured logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::Status { .. } => "status",
            Self::Network(_) => "network",
            Self::Io { .. } => "io",
            Self::InvalidPath(_) => "invalid_path",
        }
    }
}

// ============================================================================
// Deck Errors
// ============================================================================

/// Slide deck loading errors.
#[derive(Debug, Error)]
pub enum DeckError {
    /// The slides file could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path to the slides file
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The slides file is not a valid slide array
    #[error("failed to parse slides: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two slides share an identifier
    #[error("duplicate slide id: {0}")]
    DuplicateId(String),
}

// ============================================================================
// Server Errors
// ============================================================================

/// HTTP server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind the listener
    #[error("bind failed: {0}")]
    Bind(String),

    /// Bind address could not be parsed
    #[error("invalid bind address \"{input}\": {message}")]
    InvalidAddress {
        /// What the user passed
        input: String,
        /// Parser message
        message: String,
    },

    /// Metrics exporter could not be installed
    #[error("metrics exporter: {0}")]
    Metrics(String),

    /// The server stopped with an I/O error
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `aacbook` operations.
pub type Result<T> = std::result::Result<T, BookError>;

// ============================================================================
// Tests
// ============================================================================
