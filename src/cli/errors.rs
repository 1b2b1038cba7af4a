//! CLI-specific error types
//!
//! All CLI errors are fatal to the invocation and exit non-zero.

use std::io;

use thiserror::Error;

use crate::descriptor::DescriptorError;
use crate::model::ModelError;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Data directory problem (unreadable, bad layout)
    #[error("FORM_CLI_CONFIG_ERROR: {0}")]
    Config(String),

    /// Data directory already carries the initialized layout
    #[error("FORM_CLI_ALREADY_INITIALIZED: '{0}' is already initialized")]
    AlreadyInitialized(String),

    /// Data directory has no initialized layout
    #[error("FORM_CLI_NOT_INITIALIZED: '{0}' is not initialized. Run 'formguard init' first.")]
    NotInitialized(String),

    /// stdout/stderr or filesystem I/O failure
    #[error("FORM_CLI_IO_ERROR: {0}")]
    Io(String),

    /// Declaration load failure
    #[error("{}: {}", .0.code(), .0)]
    Model(#[from] ModelError),

    /// Descriptor build failure
    #[error("{}: {}", .0.code(), .0)]
    Build(#[from] DescriptorError),
}

impl CliError {
    /// Data directory already initialized
    pub fn already_initialized(dir: impl std::fmt::Display) -> Self {
        Self::AlreadyInitialized(dir.to_string())
    }

    /// Data directory not initialized
    pub fn not_initialized(dir: impl std::fmt::Display) -> Self {
        Self::NotInitialized(dir.to_string())
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Io(format!("JSON error: {}", e))
    }
}
