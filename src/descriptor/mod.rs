//! Descriptor building for formguard
//!
//! The final, ordered, serializable validation descriptor for a target type:
//!
//! - field order = declaration order; rule order = registration order
//! - per-rule modes resolve lazily against the field default in one
//!   deterministic pass
//! - continue-marked composites splice their child's descriptors, namespaced
//!   under the parent field path, immediately after the parent's own entry
//! - builds are pure and deterministic; repeated builds serialize
//!   byte-identically

mod builder;
mod cache;
mod errors;
mod types;

pub use builder::DescriptorBuilder;
pub use cache::DescriptorCache;
pub use errors::{DescriptorError, DescriptorResult};
pub use types::{FieldDescriptor, RuleDescriptor, ValidationDescriptor};
