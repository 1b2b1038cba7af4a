//! Descriptor build error types
//!
//! Builds fail synchronously and whole; there is no partial descriptor. The
//! composition cycle guard is not an error and never appears here.

use thiserror::Error;

use crate::model::ModelError;
use crate::rules::RuleError;

/// Result type for descriptor builds
pub type DescriptorResult<T> = Result<T, DescriptorError>;

/// Errors aborting a descriptor build
#[derive(Debug, Clone, Error)]
pub enum DescriptorError {
    /// Alias lookup failed for a rule referenced by the table
    #[error(transparent)]
    Rule(#[from] RuleError),

    /// Target/field lookup failed against the declaration table
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl DescriptorError {
    /// Returns the stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            DescriptorError::Rule(e) => e.code(),
            DescriptorError::Model(e) => e.code(),
        }
    }
}
