//! Per-target descriptor cache
//!
//! Descriptors are immutable once built, so they are shared as `Arc`s. The
//! build happens under the cache lock, which gives at-most-once-build-per-
//! target under concurrent first access; builds are in-memory only, so
//! holding the lock across a build never blocks on I/O.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use super::builder::DescriptorBuilder;
use super::errors::DescriptorResult;
use super::types::ValidationDescriptor;

/// Caches built descriptors keyed by target id
pub struct DescriptorCache {
    built: Mutex<HashMap<String, Arc<ValidationDescriptor>>>,
}

impl DescriptorCache {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self {
            built: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the cached descriptor for a target, building it on first
    /// access.
    ///
    /// Failed builds are not cached; the next access retries.
    pub fn get(
        &self,
        builder: &DescriptorBuilder<'_>,
        target_id: &str,
    ) -> DescriptorResult<Arc<ValidationDescriptor>> {
        let mut built = self
            .built
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(descriptor) = built.get(target_id) {
            return Ok(Arc::clone(descriptor));
        }

        let descriptor = Arc::new(builder.build(target_id)?);
        built.insert(target_id.to_string(), Arc::clone(&descriptor));
        Ok(descriptor)
    }

    /// Returns the number of cached descriptors
    pub fn len(&self) -> usize {
        self.built
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true when nothing is cached yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for DescriptorCache {
    fn default() -> Self {
        Self::new()
    }
}
