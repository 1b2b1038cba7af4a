//! Field-rule table resolution
//!
//! Merges attribute-declared rules with accumulated overrides into a
//! per-target `TargetDescriptor`. Per-rule modes stay unresolved here
//! (`Option<TriggerMode>`); inheritance from the field default is applied in
//! a single pass when the descriptor is built, so default-mode overrides
//! registered after a rule are still observed.

use crate::model::{ModelError, ModelResult, TargetRegistry, TriggerMode};
use crate::overrides::{OverrideEntry, OverrideStore};
use crate::rules::RuleId;

/// A rule attached to a field, with its unresolved mode override
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    /// Rule identity token
    pub rule: RuleId,
    /// Explicit mode override; inherits the field default when `None`
    pub mode: Option<TriggerMode>,
}

/// Resolved rule set for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEntry {
    /// Field name
    pub name: String,
    /// Effective default mode after overrides
    pub default_mode: TriggerMode,
    /// Rules in registration order: attribute-declared, then overrides
    pub rules: Vec<FieldRule>,
}

/// Resolved field-rule table for one target, fields in declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDescriptor {
    /// Target type identifier
    pub target_id: String,
    /// Field entries in declaration order
    pub fields: Vec<FieldEntry>,
}

impl TargetDescriptor {
    /// Looks up a field entry by name
    pub fn field(&self, name: &str) -> Option<&FieldEntry> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Merges the declaration table with the override store
pub struct FieldRuleTable<'a> {
    registry: &'a TargetRegistry,
    overrides: &'a OverrideStore,
}

impl<'a> FieldRuleTable<'a> {
    /// Creates a table over the given registry and override store
    pub fn new(registry: &'a TargetRegistry, overrides: &'a OverrideStore) -> Self {
        Self {
            registry,
            overrides,
        }
    }

    /// Resolves the merged table for one target.
    ///
    /// Attribute-declared rules are inserted first in field-declaration
    /// order; override entries apply after in registration order. Overrides
    /// replace the default mode but never remove declared rules.
    pub fn for_target(&self, target_id: &str) -> ModelResult<TargetDescriptor> {
        let model = self.registry.require(target_id)?;

        let mut fields: Vec<FieldEntry> = model
            .fields
            .iter()
            .map(|decl| FieldEntry {
                name: decl.name.clone(),
                default_mode: decl.mode.unwrap_or_default(),
                rules: decl
                    .rules
                    .iter()
                    .map(|r| FieldRule {
                        rule: r.rule.clone(),
                        mode: r.mode,
                    })
                    .collect(),
            })
            .collect();

        for entry in self.overrides.entries_for(target_id) {
            // Selectors were validated at registration; a miss here means the
            // store and registry disagree, which is a caller bug worth
            // surfacing rather than skipping.
            let field = fields
                .iter_mut()
                .find(|f| f.name == entry.field())
                .ok_or_else(|| ModelError::UnknownField {
                    target: target_id.to_string(),
                    field: entry.field().to_string(),
                })?;

            match entry {
                OverrideEntry::DefaultMode { mode, .. } => {
                    field.default_mode = *mode;
                }
                OverrideEntry::AddRule { rule, mode, .. } => {
                    field.rules.push(FieldRule {
                        rule: rule.clone(),
                        mode: *mode,
                    });
                }
            }
        }

        Ok(TargetDescriptor {
            target_id: target_id.to_string(),
            fields,
        })
    }
}
