//! Rule and composition resolution for formguard
//!
//! Turns declarations plus accumulated overrides into per-target resolved
//! tables:
//!
//! - attribute-declared rules come first, in field-declaration order
//! - override entries apply after, in registration order; default-mode
//!   overrides replace, added rules append
//! - composition policy decides descent per field; composites never descend
//!   unless explicitly marked continue

mod composition;
mod table;

pub use composition::{policy_for, CompositionPolicy};
pub use table::{FieldEntry, FieldRule, FieldRuleTable, TargetDescriptor};
