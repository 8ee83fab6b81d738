//! Error types and definitions for component-readme
//!
//! Every failure carries enough path and role context for the caller to
//! tell which file and which part of the export (component, props or
//! static config) could not be read.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::models::extraction::Role;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Warning level errors - operation can continue
    Warning,
    /// Error level - current folder fails but overall process can continue
    Error,
    /// Critical level - process should terminate
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for component-readme operations
#[derive(Debug, Error)]
pub enum ReadmeError {
    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// Reading a resolved source file failed
    #[error("Error reading {path}: {source}")]
    IoRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// None of the probed dialect candidates exists
    #[error("{}", not_found_message(.candidates))]
    NotFound { candidates: Vec<PathBuf> },

    /// Zero or several object literals bound to the recognised export form
    #[error("no definitive export in {path} ({candidates} candidates)")]
    AmbiguousExport { path: PathBuf, candidates: usize },

    /// The parser reported diagnostics for a file
    #[error("{}", .messages.join("\n"))]
    Parse { path: PathBuf, messages: Vec<String> },

    /// Extraction of a role failed with an underlying error
    #[error("error parsing {role} in {path}\n{message}")]
    Extraction {
        role: Role,
        path: PathBuf,
        message: String,
    },

    /// Extraction finished without producing a required role
    #[error("could not parse {role} in {path}")]
    MissingMember { role: Role, path: PathBuf },

    /// Static option values did not fit the expected shape
    #[error("Invalid {role} options in {path}: {source}")]
    InvalidOptions {
        role: Role,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Permission denied errors
    #[error("Permission denied accessing {path}")]
    PermissionDenied { path: PathBuf },

    /// Invalid path errors
    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },

    /// TOML parsing errors
    #[error("TOML parsing error: {source}")]
    TomlParse {
        #[source]
        source: toml::de::Error,
    },

    /// CSV handling errors
    #[error("CSV error: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },

    /// Glob pattern errors
    #[error("Glob pattern error: {source}")]
    GlobPattern {
        #[source]
        source: glob::PatternError,
    },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Output file write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal errors
    #[error("Directory traversal error for {path}: {message}")]
    DirectoryTraversal { path: PathBuf, message: String },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },

    /// CSV serialization error
    #[error("CSV serialization error: {source}")]
    CsvSerialize {
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Output directory not found
    #[error("Output directory not found: {path}")]
    OutputDirectoryNotFound { path: PathBuf },
}

fn not_found_message(candidates: &[PathBuf]) -> String {
    match candidates {
        [single] => format!("cannot find `{}`", single.display()),
        _ => {
            let joined = candidates
                .iter()
                .map(|path| path.display().to_string())
                .collect::<Vec<_>>()
                .join(",");
            format!("cannot find one of `{}`", joined)
        }
    }
}

impl ReadmeError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Warning level errors - operation can continue
            ReadmeError::PermissionDenied { .. } => ErrorSeverity::Warning,

            // Critical errors - process should terminate
            ReadmeError::Config { .. } => ErrorSeverity::Critical,
            ReadmeError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            ReadmeError::ConfigRead { .. } => ErrorSeverity::Critical,
            ReadmeError::ConfigParse { .. } => ErrorSeverity::Critical,
            ReadmeError::StdoutWrite { .. } => ErrorSeverity::Critical,
            ReadmeError::OutputDirectoryNotFound { .. } => ErrorSeverity::Critical,
            ReadmeError::InvalidPath { .. } => ErrorSeverity::Critical,

            // Regular errors - current folder fails but the run can continue
            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            ReadmeError::PermissionDenied { path } => {
                format!("Cannot access '{}' due to permission denied. Check file permissions.", path.display())
            }
            ReadmeError::Io { source } => {
                format!("File system error: {}. Check disk space and permissions.", source)
            }
            ReadmeError::InvalidPath { path } => {
                format!("Invalid path: '{}'. Please provide a valid components directory.", path.display())
            }
            ReadmeError::ConfigNotFound { path } => {
                format!("Configuration file not found at '{}'. Create a config file or use command line options.", path.display())
            }
            ReadmeError::OutputDirectoryNotFound { path } => {
                format!("Output directory '{}' does not exist. Please create the directory or specify a different output path.", path.display())
            }
            // For other errors, use the standard Display implementation
            _ => self.to_string(),
        }
    }

    /// Create an IO error with context
    pub fn io_error(source: std::io::Error) -> Self {
        ReadmeError::Io { source }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        ReadmeError::Config {
            message: message.into(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        ReadmeError::PermissionDenied { path: path.into() }
    }

    /// Create a not-found error listing every probed candidate
    pub fn not_found(candidates: Vec<PathBuf>) -> Self {
        ReadmeError::NotFound { candidates }
    }

    /// Wrap an underlying failure with the role and file it happened in
    pub fn extraction(role: Role, path: impl Into<PathBuf>, source: &ReadmeError) -> Self {
        ReadmeError::Extraction {
            role,
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create an error for a role that produced no result
    pub fn missing_member(role: Role, path: impl Into<PathBuf>) -> Self {
        ReadmeError::MissingMember {
            role,
            path: path.into(),
        }
    }

    /// Create a directory traversal error
    pub fn directory_traversal_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ReadmeError::DirectoryTraversal {
            path: path.into(),
            message: message.into(),
        }
    }
}

// Implement From for common error types
impl From<std::io::Error> for ReadmeError {
    fn from(err: std::io::Error) -> Self {
        ReadmeError::io_error(err)
    }
}

impl From<toml::de::Error> for ReadmeError {
    fn from(err: toml::de::Error) -> Self {
        ReadmeError::TomlParse { source: err }
    }
}

impl From<csv::Error> for ReadmeError {
    fn from(err: csv::Error) -> Self {
        ReadmeError::Csv { source: err }
    }
}

impl From<glob::PatternError> for ReadmeError {
    fn from(err: glob::PatternError) -> Self {
        ReadmeError::GlobPattern { source: err }
    }
}

impl From<serde_json::Error> for ReadmeError {
    fn from(err: serde_json::Error) -> Self {
        ReadmeError::JsonSerialize { source: err }
    }
}

/// Result type alias for component-readme operations
pub type Result<T> = std::result::Result<T, ReadmeError>;
