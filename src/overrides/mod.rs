//! Override accumulator for formguard
//!
//! Overrides are declarative additions applied on top of attribute-declared
//! rules:
//!
//! - Entries are kept in registration order; that order is observable in the
//!   built descriptor
//! - Field selectors are resolved against the declared model when a set is
//!   registered, so bad selectors fail fast
//! - Re-adding the same rule appends; duplicates are legal and both appear

mod accumulator;

pub use accumulator::{OverrideEntry, OverrideSet, OverrideStore};
