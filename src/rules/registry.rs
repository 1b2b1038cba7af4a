//! Rule identity tokens and the process-wide alias table

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::errors::{RuleError, RuleResult};

/// Conventional suffix stripped when deriving an alias from a rule name
const RULE_SUFFIX: &str = "FieldRule";

/// Identity token for a validation rule implementation.
///
/// Tokens follow the rule's conventional type name (e.g. `RequiredFieldRule`).
/// Identity comparisons use this token, never the serialized alias.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleId(String);

impl RuleId {
    /// Creates a rule identity from a type-name token
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the identity token
    pub fn token(&self) -> &str {
        &self.0
    }

    /// The stock required-value rule
    pub fn required() -> Self {
        Self::new("RequiredFieldRule")
    }

    /// The stock email-format rule
    pub fn email() -> Self {
        Self::new("EmailFieldRule")
    }

    /// The stock minimum-length rule
    pub fn min_length() -> Self {
        Self::new("MinimumLengthFieldRule")
    }

    /// The stock maximum-length rule
    pub fn max_length() -> Self {
        Self::new("MaximumLengthFieldRule")
    }

    /// The stock minimum-value rule
    pub fn min_value() -> Self {
        Self::new("MinValueFieldRule")
    }

    /// The stock maximum-value rule
    pub fn max_value() -> Self {
        Self::new("MaxValueFieldRule")
    }

    /// The stock regular-expression rule
    pub fn regex() -> Self {
        Self::new("RegularExpressionFieldRule")
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable-after-startup table mapping rule identities to serialized aliases.
///
/// Lookups are pure; registration happens during the single configuration
/// phase before any descriptor is built.
pub struct RuleRegistry {
    aliases: HashMap<RuleId, String>,
}

impl RuleRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            aliases: HashMap::new(),
        }
    }

    /// Creates a registry pre-populated with the stock rule set
    pub fn with_stock_rules() -> Self {
        let mut registry = Self::new();
        registry.register(RuleId::required());
        registry.register(RuleId::email());
        registry.register_alias(RuleId::min_length(), "min-length");
        registry.register_alias(RuleId::max_length(), "max-length");
        registry.register_alias(RuleId::min_value(), "min-value");
        registry.register_alias(RuleId::max_value(), "max-value");
        registry.register_alias(RuleId::regex(), "regex");
        registry
    }

    /// Registers a rule under its convention-derived alias
    pub fn register(&mut self, rule: RuleId) {
        let alias = derive_alias(rule.token());
        self.aliases.insert(rule, alias);
    }

    /// Registers a rule under an explicit alias, for names that do not follow
    /// the derivation convention
    pub fn register_alias(&mut self, rule: RuleId, alias: impl Into<String>) {
        self.aliases.insert(rule, alias.into());
    }

    /// Returns the serialized alias for a rule.
    ///
    /// # Errors
    ///
    /// Returns `FORM_UNKNOWN_RULE` if the rule was never registered.
    pub fn alias_for(&self, rule: &RuleId) -> RuleResult<&str> {
        self.aliases
            .get(rule)
            .map(String::as_str)
            .ok_or_else(|| RuleError::UnknownRule {
                rule: rule.token().to_string(),
            })
    }

    /// Checks whether a rule is registered
    pub fn is_registered(&self, rule: &RuleId) -> bool {
        self.aliases.contains_key(rule)
    }

    /// Returns the number of registered rules
    pub fn rule_count(&self) -> usize {
        self.aliases.len()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::with_stock_rules()
    }
}

/// Derives an alias from a rule name: strip the conventional suffix, lowercase
fn derive_alias(token: &str) -> String {
    token.strip_suffix(RULE_SUFFIX).unwrap_or(token).to_lowercase()
}
