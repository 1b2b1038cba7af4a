//! In-memory registry of declared target models

use std::collections::HashMap;

use super::errors::{ModelError, ModelResult};
use super::types::TargetModel;

/// Registry of target models, keyed by target id.
///
/// Models are immutable once registered; re-registration is rejected so a
/// cached descriptor can never disagree with the declarations it was built
/// from.
#[derive(Debug)]
pub struct TargetRegistry {
    models: HashMap<String, TargetModel>,
}

impl TargetRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            models: HashMap::new(),
        }
    }

    /// Registers a target model.
    ///
    /// # Errors
    ///
    /// Returns `FORM_MALFORMED_MODEL` if the model violates structural
    /// invariants, or `FORM_DUPLICATE_TARGET` if the id is already taken.
    pub fn register(&mut self, model: TargetModel) -> ModelResult<()> {
        model
            .validate_structure()
            .map_err(|reason| ModelError::MalformedModel {
                path: "<in-memory>".into(),
                reason,
            })?;

        if self.models.contains_key(&model.target_id) {
            return Err(ModelError::DuplicateTarget {
                target: model.target_id,
            });
        }

        self.models.insert(model.target_id.clone(), model);
        Ok(())
    }

    /// Looks up a model by target id
    pub fn get(&self, target_id: &str) -> Option<&TargetModel> {
        self.models.get(target_id)
    }

    /// Looks up a model, failing with `FORM_UNKNOWN_TARGET` when absent
    pub fn require(&self, target_id: &str) -> ModelResult<&TargetModel> {
        self.get(target_id).ok_or_else(|| ModelError::UnknownTarget {
            target: target_id.to_string(),
        })
    }

    /// Checks whether a target is registered
    pub fn exists(&self, target_id: &str) -> bool {
        self.models.contains_key(target_id)
    }

    /// Returns all target ids in sorted order
    pub fn target_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.models.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Returns the number of registered targets
    pub fn target_count(&self) -> usize {
        self.models.len()
    }
}

impl Default for TargetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::FieldDecl;

    fn sample_model() -> TargetModel {
        TargetModel::new(
            "Account",
            vec![FieldDecl::scalar("Name"), FieldDecl::scalar("Email")],
        )
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = TargetRegistry::new();
        registry.register(sample_model()).unwrap();

        assert!(registry.exists("Account"));
        assert_eq!(registry.get("Account").unwrap().fields.len(), 2);
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = TargetRegistry::new();
        registry.register(sample_model()).unwrap();

        let result = registry.register(sample_model());
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().code(), "FORM_DUPLICATE_TARGET");
    }

    #[test]
    fn test_malformed_model_rejected() {
        let mut registry = TargetRegistry::new();
        let model = TargetModel::new("", vec![]);

        let result = registry.register(model);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().code(), "FORM_MALFORMED_MODEL");
    }

    #[test]
    fn test_require_unknown_target() {
        let registry = TargetRegistry::new();
        let result = registry.require("Nope");
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().code(), "FORM_UNKNOWN_TARGET");
    }

    #[test]
    fn test_target_ids_sorted() {
        let mut registry = TargetRegistry::new();
        registry
            .register(TargetModel::new("Zeta", vec![FieldDecl::scalar("A")]))
            .unwrap();
        registry
            .register(TargetModel::new("Alpha", vec![FieldDecl::scalar("A")]))
            .unwrap();

        assert_eq!(registry.target_ids(), vec!["Alpha", "Zeta"]);
    }
}
