//! Rule identity and alias registry for formguard
//!
//! Rules are identified by explicit type-name tokens (no reflection) and
//! serialized under short, stable aliases:
//!
//! - Aliases derive from the rule name by convention (strip the `FieldRule`
//!   suffix, lowercase), with explicit aliases for names that do not follow it
//! - The registry is populated once at startup and read-only afterwards
//! - Aliases are a serialization concern only; identity comparisons always
//!   use [`RuleId`]

mod errors;
mod registry;

pub use errors::{RuleError, RuleResult};
pub use registry::{RuleId, RuleRegistry};
