//! Target and field declaration types
//!
//! A `TargetModel` declares, per target type:
//! - ordered fields (declaration order is observable)
//! - per-field trigger-mode marks (the attribute-declared default)
//! - per-field composition marks (continue/restricted descent)
//! - attribute-declared rules, inserted before any accumulator overrides

use serde::{Deserialize, Serialize};

use crate::rules::RuleId;

/// When a rule is evaluated: continuously, or on an explicit action.
///
/// The framework-wide default is `Live`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerMode {
    /// Validated eagerly/continuously
    Live,
    /// Validated on an explicit action (e.g. submit)
    Triggered,
}

impl Default for TriggerMode {
    fn default() -> Self {
        TriggerMode::Live
    }
}

impl TriggerMode {
    /// Returns the serialized mode string
    pub fn as_str(&self) -> &'static str {
        match self {
            TriggerMode::Live => "live",
            TriggerMode::Triggered => "triggered",
        }
    }
}

impl std::fmt::Display for TriggerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Explicit per-field composition mark.
///
/// Absent a mark, scalar fields are leaves and composite fields are
/// restricted (no descent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompositionMark {
    /// Descend into the child target's own declarations
    Continue,
    /// Treat the field as an opaque leaf despite being composite
    Restricted,
}

/// Structural kind of a declared field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    /// Scalar/primitive value
    Scalar,
    /// Reference to another declared target
    Composite {
        /// Target id of the child model
        target: String,
    },
}

impl Default for FieldKind {
    fn default() -> Self {
        FieldKind::Scalar
    }
}

impl FieldKind {
    /// Returns true for composite (reference-typed) fields
    pub fn is_composite(&self) -> bool {
        matches!(self, FieldKind::Composite { .. })
    }
}

/// An attribute-declared rule on a field.
///
/// A missing mode inherits the field's default mode at build time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredRule {
    /// Rule identity token
    pub rule: RuleId,
    /// Explicit per-rule mode override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<TriggerMode>,
}

/// A single field declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDecl {
    /// Field name, unique within the target
    pub name: String,
    /// Structural kind (scalar unless declared otherwise)
    #[serde(default)]
    pub kind: FieldKind,
    /// Attribute-declared default mode mark
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<TriggerMode>,
    /// Explicit composition mark
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composition: Option<CompositionMark>,
    /// Attribute-declared rules, in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<DeclaredRule>,
}

impl FieldDecl {
    /// Creates a scalar field with no marks
    pub fn scalar(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Scalar,
            mode: None,
            composition: None,
            rules: Vec::new(),
        }
    }

    /// Creates a composite field referencing another target
    pub fn composite(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Composite {
                target: target.into(),
            },
            mode: None,
            composition: None,
            rules: Vec::new(),
        }
    }

    /// Sets the attribute-declared default mode mark
    pub fn with_mode(mut self, mode: TriggerMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Sets the explicit composition mark
    pub fn with_composition(mut self, mark: CompositionMark) -> Self {
        self.composition = Some(mark);
        self
    }

    /// Appends an attribute-declared rule
    pub fn with_rule(mut self, rule: RuleId, mode: Option<TriggerMode>) -> Self {
        self.rules.push(DeclaredRule { rule, mode });
        self
    }
}

/// Declared field structure for one target type.
///
/// Built once during the configuration phase, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetModel {
    /// Target type identifier
    pub target_id: String,
    /// Fields in declaration order
    pub fields: Vec<FieldDecl>,
}

impl TargetModel {
    /// Creates a target model from ordered field declarations
    pub fn new(target_id: impl Into<String>, fields: Vec<FieldDecl>) -> Self {
        Self {
            target_id: target_id.into(),
            fields,
        }
    }

    /// Looks up a field declaration by name
    pub fn field(&self, name: &str) -> Option<&FieldDecl> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Validates structural invariants.
    ///
    /// Checked before registration:
    /// - non-empty target id and field names
    /// - field names unique within the target
    /// - composite kinds carry a non-empty child target id
    /// - continue marks only on composite fields
    pub fn validate_structure(&self) -> Result<(), String> {
        if self.target_id.is_empty() {
            return Err("target_id must not be empty".into());
        }

        let mut seen = std::collections::HashSet::new();
        for field in &self.fields {
            if field.name.is_empty() {
                return Err("field name must not be empty".into());
            }
            if !seen.insert(field.name.as_str()) {
                return Err(format!("duplicate field '{}'", field.name));
            }
            if let FieldKind::Composite { target } = &field.kind {
                if target.is_empty() {
                    return Err(format!(
                        "composite field '{}' must reference a target",
                        field.name
                    ));
                }
            } else if field.composition == Some(CompositionMark::Continue) {
                return Err(format!(
                    "scalar field '{}' cannot be marked continue",
                    field.name
                ));
            }
        }

        Ok(())
    }
}
