//! Model declaration error types
//!
//! Error codes:
//! - FORM_DUPLICATE_TARGET (REJECT)
//! - FORM_UNKNOWN_TARGET (REJECT)
//! - FORM_UNKNOWN_FIELD (REJECT)
//! - FORM_MALFORMED_MODEL (FATAL)

use thiserror::Error;

/// Severity levels for model errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Caller request rejected
    Reject,
    /// Startup must abort (malformed declaration files)
    Fatal,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Result type for model operations
pub type ModelResult<T> = Result<T, ModelError>;

/// Target declaration errors
#[derive(Debug, Clone, Error)]
pub enum ModelError {
    /// Attempt to re-register a target; declarations are immutable
    #[error("Target '{target}' is already registered")]
    DuplicateTarget {
        /// Target identifier
        target: String,
    },

    /// Target id not found in the registry
    #[error("Target '{target}' not found")]
    UnknownTarget {
        /// Target identifier
        target: String,
    },

    /// Field selector does not resolve against the declared model.
    /// Programmer error, surfaced at registration time.
    #[error("Target '{target}' has no field '{field}'")]
    UnknownField {
        /// Target identifier
        target: String,
        /// The unresolved field selector
        field: String,
    },

    /// Declaration file failed to parse or violates structural invariants
    #[error("Malformed model '{path}': {reason}")]
    MalformedModel {
        /// File path or `<in-memory>` for programmatic registration
        path: String,
        /// Structural violation description
        reason: String,
    },
}

impl ModelError {
    /// Returns the stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            ModelError::DuplicateTarget { .. } => "FORM_DUPLICATE_TARGET",
            ModelError::UnknownTarget { .. } => "FORM_UNKNOWN_TARGET",
            ModelError::UnknownField { .. } => "FORM_UNKNOWN_FIELD",
            ModelError::MalformedModel { .. } => "FORM_MALFORMED_MODEL",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            ModelError::MalformedModel { .. } => Severity::Fatal,
            _ => Severity::Reject,
        }
    }

    /// Returns whether this is a fatal error
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = ModelError::DuplicateTarget {
            target: "Account".into(),
        };
        assert_eq!(err.code(), "FORM_DUPLICATE_TARGET");

        let err = ModelError::UnknownField {
            target: "Account".into(),
            field: "Nope".into(),
        };
        assert_eq!(err.code(), "FORM_UNKNOWN_FIELD");
    }

    #[test]
    fn test_severity_levels() {
        let reject = ModelError::UnknownTarget {
            target: "Account".into(),
        };
        assert_eq!(reject.severity(), Severity::Reject);
        assert!(!reject.is_fatal());

        let fatal = ModelError::MalformedModel {
            path: "targets/x.json".into(),
            reason: "invalid JSON".into(),
        };
        assert_eq!(fatal.severity(), Severity::Fatal);
        assert!(fatal.is_fatal());
    }
}
