//! # CLI Error Type
//!
//! Unified error type for commands, plus configuration errors.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the CLI                                │
//! │                                                                         │
//! │  Command Function → Result<(), CliError>                               │
//! │         │                                                               │
//! │         ├── ValidationError (bad form input)   ──┐                     │
//! │         ├── CoreError::ProductNotFound          ──┤                     │
//! │         ├── StoreError (export write failed)    ──┼──► CliError         │
//! │         ├── ConfigError (bad catalog.toml)      ──┤    { code, msg }    │
//! │         └── io::Error (terminal write failed)   ──┘         │           │
//! │                                                             ▼           │
//! │                                           main: eprintln + exit code   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use catalog_core::{CoreError, ValidationError};
use catalog_store::StoreError;

// =============================================================================
// Config Error
// =============================================================================

/// Errors while loading or saving `catalog.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to save config: {0}")]
    Save(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// CLI Error
// =============================================================================

/// Error returned from a command.
#[derive(Debug, Clone)]
pub struct CliError {
    /// Machine-readable category, drives the exit code
    pub code: ErrorCode,

    /// Human-readable message for the terminal
    pub message: String,
}

/// Error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Unknown product id
    NotFound,

    /// Form input rejected
    ValidationError,

    /// Reading or writing data failed
    StorageError,

    /// Configuration could not be loaded
    ConfigError,

    /// Anything else (terminal I/O)
    Internal,
}

impl ErrorCode {
    /// Process exit status for this category.
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorCode::NotFound => 2,
            ErrorCode::ValidationError => 3,
            ErrorCode::StorageError => 4,
            ErrorCode::ConfigError => 5,
            ErrorCode::Internal => 1,
        }
    }
}

impl CliError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CliError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        CliError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::ValidationError, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.code.exit_code()
    }
}

/// Result type for commands.
pub type CliResult<T> = Result<T, CliError>;

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => CliError::not_found("Product", &id),
            CoreError::Validation(e) => CliError::validation(e.to_string()),
        }
    }
}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        CliError::validation(err.to_string())
    }
}

impl From<StoreError> for CliError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidKey(key) => {
                CliError::new(ErrorCode::ConfigError, format!("Invalid storage key: '{}'", key))
            }
            other => {
                tracing::error!("Storage operation failed: {}", other);
                CliError::new(ErrorCode::StorageError, other.to_string())
            }
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::new(ErrorCode::Internal, format!("Output failed: {}", err))
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}
