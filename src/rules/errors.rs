//! Rule registry error types
//!
//! Error codes:
//! - FORM_UNKNOWN_RULE (REJECT)

use thiserror::Error;

/// Result type for rule registry operations
pub type RuleResult<T> = Result<T, RuleError>;

/// Rule registry errors
#[derive(Debug, Clone, Error)]
pub enum RuleError {
    /// Alias lookup for a rule that was never registered.
    /// Fatal to the descriptor build that triggered it.
    #[error("Rule '{rule}' is not registered")]
    UnknownRule {
        /// The unresolved rule identity token
        rule: String,
    },
}

impl RuleError {
    /// Returns the stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            RuleError::UnknownRule { .. } => "FORM_UNKNOWN_RULE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_rule_code() {
        let err = RuleError::UnknownRule {
            rule: "CreditCardFieldRule".into(),
        };
        assert_eq!(err.code(), "FORM_UNKNOWN_RULE");
        assert!(err.to_string().contains("CreditCardFieldRule"));
    }
}
