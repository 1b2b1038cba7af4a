//! Target declaration table for formguard
//!
//! Field structure and attribute marks are declared explicitly rather than
//! scanned via reflection, keeping descriptor builds deterministic:
//!
//! - Declarations are registered once and immutable afterwards
//! - Field order is declaration order and part of the observable contract
//! - Malformed declaration files abort startup (FATAL)

mod errors;
mod loader;
mod registry;
mod types;

pub use errors::{ModelError, ModelResult, Severity};
pub use loader::ModelLoader;
pub use registry::TargetRegistry;
pub use types::{
    CompositionMark, DeclaredRule, FieldDecl, FieldKind, TargetModel, TriggerMode,
};
