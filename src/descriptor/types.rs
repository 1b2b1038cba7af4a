//! Wire shape of the built descriptor
//!
//! This is the only contract the rendering layer sees; shape, order, and
//! serialized content are all part of it. Serialization must be byte-stable
//! across repeated builds of the same target.

use serde::{Deserialize, Serialize};

use crate::model::TriggerMode;

/// One rule on one field, fully resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDescriptor {
    /// Serialized rule alias (never the identity token)
    pub rule: String,
    /// Effective trigger mode for this rule
    pub mode: TriggerMode,
}

/// One field, fully resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field path; spliced child fields are namespaced `parent.child`
    pub field: String,
    /// Effective field mode
    pub mode: TriggerMode,
    /// Rules in registration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<RuleDescriptor>,
}

/// The final ordered validation descriptor for a target type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationDescriptor {
    /// Target type identifier
    pub target: String,
    /// Field descriptors; declaration order with spliced children inline
    pub fields: Vec<FieldDescriptor>,
}

impl ValidationDescriptor {
    /// Looks up a field descriptor by path
    pub fn field(&self, path: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.field == path)
    }

    /// Serializes to compact JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serializes to pretty-printed JSON
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
