//! Per-field composition policy resolution
//!
//! Precedence: explicit per-field mark > kind-based default. Scalars default
//! to leaves; composites default to restricted, so descent is always an
//! explicit opt-in. The recursion guard for self-referential models lives in
//! the descriptor builder, which tracks the target ids on the current build
//! path and downgrades a revisited Continue to Restricted.

use crate::model::{CompositionMark, FieldDecl, FieldKind};

/// How a field participates in descriptor composition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositionPolicy {
    /// Scalar value, validated in place
    Leaf,
    /// Descend into the child target and splice its field descriptors
    Continue,
    /// Opaque leaf; no descent despite being composite
    Restricted,
}

/// Resolves the composition policy for one declared field
pub fn policy_for(field: &FieldDecl) -> CompositionPolicy {
    match (field.composition, &field.kind) {
        (Some(CompositionMark::Continue), FieldKind::Composite { .. }) => {
            CompositionPolicy::Continue
        }
        (Some(CompositionMark::Restricted), _) => CompositionPolicy::Restricted,
        // Structure validation rejects continue marks on scalars; treat a
        // stray one as the kind default anyway.
        (_, FieldKind::Scalar) => CompositionPolicy::Leaf,
        (_, FieldKind::Composite { .. }) => CompositionPolicy::Restricted,
    }
}
