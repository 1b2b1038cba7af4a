//! Deterministic descriptor construction

use crate::model::{FieldKind, TargetRegistry};
use crate::observability::logger;
use crate::overrides::OverrideStore;
use crate::resolve::{policy_for, CompositionPolicy, FieldRuleTable};
use crate::rules::RuleRegistry;

use super::errors::DescriptorResult;
use super::types::{FieldDescriptor, RuleDescriptor, ValidationDescriptor};

/// Builds validation descriptors from the resolved field-rule table, the
/// composition policy, and the rule alias registry.
///
/// Builds are pure in-memory graph walks; the same inputs always produce a
/// structurally equal descriptor.
pub struct DescriptorBuilder<'a> {
    rules: &'a RuleRegistry,
    targets: &'a TargetRegistry,
    overrides: &'a OverrideStore,
}

impl<'a> DescriptorBuilder<'a> {
    /// Creates a builder over the given registries
    pub fn new(
        rules: &'a RuleRegistry,
        targets: &'a TargetRegistry,
        overrides: &'a OverrideStore,
    ) -> Self {
        Self {
            rules,
            targets,
            overrides,
        }
    }

    /// Builds the validation descriptor for a target type.
    ///
    /// # Errors
    ///
    /// Propagates `FORM_UNKNOWN_RULE` from alias lookups and
    /// `FORM_UNKNOWN_TARGET` when the target (or a continue-marked child)
    /// is not declared. Any failure aborts the whole build.
    pub fn build(&self, target_id: &str) -> DescriptorResult<ValidationDescriptor> {
        let mut fields = Vec::new();
        let mut path = Vec::new();
        self.build_into(target_id, "", &mut path, &mut fields)?;

        Ok(ValidationDescriptor {
            target: target_id.to_string(),
            fields,
        })
    }

    /// Appends one target's field descriptors, recursing into continue
    /// composites. `path` carries the target ids on the current descent for
    /// the cycle guard.
    fn build_into(
        &self,
        target_id: &str,
        prefix: &str,
        path: &mut Vec<String>,
        out: &mut Vec<FieldDescriptor>,
    ) -> DescriptorResult<()> {
        let model = self.targets.require(target_id)?;
        let table = FieldRuleTable::new(self.targets, self.overrides).for_target(target_id)?;

        path.push(target_id.to_string());

        // Declaration order is preserved: the table builds entries from the
        // same field list, so the two iterate in lockstep.
        for (decl, entry) in model.fields.iter().zip(table.fields.iter()) {
            let field_path = join_path(prefix, &entry.name);

            let mut rules = Vec::with_capacity(entry.rules.len());
            for rule in &entry.rules {
                rules.push(RuleDescriptor {
                    rule: self.rules.alias_for(&rule.rule)?.to_string(),
                    // Lazy inheritance: resolved here, not at registration
                    mode: rule.mode.unwrap_or(entry.default_mode),
                });
            }

            out.push(FieldDescriptor {
                field: field_path.clone(),
                mode: entry.default_mode,
                rules,
            });

            if policy_for(decl) == CompositionPolicy::Continue {
                if let FieldKind::Composite { target } = &decl.kind {
                    if path.iter().any(|t| t == target) {
                        // Revisited type on the current path: resolve as
                        // restricted, never recurse. Diagnostic only.
                        logger::trace(
                            "composition_cycle_guarded",
                            &[("field", &field_path), ("target", target)],
                        );
                    } else {
                        self.build_into(target, &field_path, path, out)?;
                    }
                }
            }
        }

        path.pop();
        Ok(())
    }
}

/// Joins a parent field path with a child field name
fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}
