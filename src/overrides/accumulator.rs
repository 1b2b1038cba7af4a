//! Ordered override entries and the per-target override store

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{ModelError, ModelResult, TargetRegistry, TriggerMode};
use crate::rules::RuleId;

/// A single override registration.
///
/// `AddRule` with no mode stores the inheritance decision, not a resolved
/// mode; the field's default is applied lazily when the descriptor is built,
/// so a later `DefaultMode` entry is still observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum OverrideEntry {
    /// Sets/overwrites the field's default trigger mode
    DefaultMode {
        /// Field selector
        field: String,
        /// New default mode
        mode: TriggerMode,
    },
    /// Appends a rule to the field
    AddRule {
        /// Field selector
        field: String,
        /// Rule identity token
        rule: RuleId,
        /// Explicit per-rule mode; inherits the field default when absent
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mode: Option<TriggerMode>,
    },
}

impl OverrideEntry {
    /// Returns the field selector of this entry
    pub fn field(&self) -> &str {
        match self {
            OverrideEntry::DefaultMode { field, .. } => field,
            OverrideEntry::AddRule { field, .. } => field,
        }
    }
}

/// A declarative batch of overrides for one target type.
///
/// Built programmatically or deserialized from an overrides file; entries
/// keep their registration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideSet {
    /// Target these overrides apply to
    pub target_id: String,
    /// Override entries in registration order
    pub entries: Vec<OverrideEntry>,
}

impl OverrideSet {
    /// Creates an empty override set for a target
    pub fn new(target_id: impl Into<String>) -> Self {
        Self {
            target_id: target_id.into(),
            entries: Vec::new(),
        }
    }

    /// Sets/overwrites a field's default trigger mode
    pub fn set_default_mode(&mut self, field: impl Into<String>, mode: TriggerMode) -> &mut Self {
        self.entries.push(OverrideEntry::DefaultMode {
            field: field.into(),
            mode,
        });
        self
    }

    /// Appends a rule to a field.
    ///
    /// A `None` mode inherits the field's default mode at build time.
    /// Re-adding the same rule appends another entry; it never replaces.
    pub fn add_rule(
        &mut self,
        field: impl Into<String>,
        rule: RuleId,
        mode: Option<TriggerMode>,
    ) -> &mut Self {
        self.entries.push(OverrideEntry::AddRule {
            field: field.into(),
            rule,
            mode,
        });
        self
    }

    /// Returns true when the set carries no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Accumulated overrides for all targets, applied after attribute-declared
/// rules when the field-rule table is resolved.
#[derive(Debug)]
pub struct OverrideStore {
    sets: HashMap<String, Vec<OverrideEntry>>,
}

impl OverrideStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            sets: HashMap::new(),
        }
    }

    /// Registers an override set, validating every field selector against
    /// the declared model.
    ///
    /// # Errors
    ///
    /// Returns `FORM_UNKNOWN_TARGET` if the target is not declared, or
    /// `FORM_UNKNOWN_FIELD` for the first selector that does not resolve.
    /// Nothing is applied on failure.
    pub fn register(&mut self, set: OverrideSet, registry: &TargetRegistry) -> ModelResult<()> {
        let model = registry.require(&set.target_id)?;

        for entry in &set.entries {
            if model.field(entry.field()).is_none() {
                return Err(ModelError::UnknownField {
                    target: set.target_id.clone(),
                    field: entry.field().to_string(),
                });
            }
        }

        // Multiple sets for one target are legal; entries accumulate in
        // registration order across sets.
        self.sets
            .entry(set.target_id)
            .or_default()
            .extend(set.entries);
        Ok(())
    }

    /// Returns the accumulated entries for a target, in registration order
    pub fn entries_for(&self, target_id: &str) -> &[OverrideEntry] {
        self.sets.get(target_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the number of targets with registered overrides
    pub fn target_count(&self) -> usize {
        self.sets.len()
    }
}

impl Default for OverrideStore {
    fn default() -> Self {
        Self::new()
    }
}
