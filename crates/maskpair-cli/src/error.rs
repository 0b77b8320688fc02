//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from `CoreError` to exit codes and user-facing messages.

use maskpair_core::{CoreError, PathError, RepositoryError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument parsing error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Input rejected by validation.
    #[error("{0}")]
    Validation(String),

    /// No pair has the requested ID.
    #[error("Image pair {0} not found")]
    NotFound(i64),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::NotFound(_) => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Validation(_) => 65, // EX_DATAERR
            Self::Io(_) => 74, // EX_IOERR
            Self::Config(_) => 78, // EX_CONFIG
            Self::Database(_) => 73, // EX_CANTCREAT (closest fit)
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => Self::from(repo_err),
            CoreError::Validation(msg) => Self::Validation(msg),
            CoreError::Configuration(msg) => Self::Config(msg),
        }
    }
}

impl From<RepositoryError> for CliError {
    fn from(err: RepositoryError) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Io(format!("failed to encode JSON: {err}"))
    }
}
