//! Declaration loader for the data directory
//!
//! Layout:
//! - `<data_dir>/targets/*.json` — one TargetModel per file
//! - `<data_dir>/overrides/*.json` — one OverrideSet per file
//!
//! Targets load before overrides so selectors always resolve against a
//! complete registry. Files load in sorted path order; override registration
//! order is observable in built descriptors, so load order must be
//! deterministic. Malformed files are FATAL.

use std::fs;
use std::path::{Path, PathBuf};

use crate::observability::logger;
use crate::overrides::{OverrideSet, OverrideStore};

use super::errors::{ModelError, ModelResult};
use super::registry::TargetRegistry;
use super::types::TargetModel;

/// Subdirectory holding target declaration files
pub const TARGETS_DIR: &str = "targets";
/// Subdirectory holding override set files
pub const OVERRIDES_DIR: &str = "overrides";

/// Reads target declarations and override sets from a data directory into
/// an in-memory registry and store.
pub struct ModelLoader {
    targets_dir: PathBuf,
    overrides_dir: PathBuf,
}

impl ModelLoader {
    /// Creates a loader rooted at the given data directory
    pub fn new(data_dir: &Path) -> Self {
        Self {
            targets_dir: data_dir.join(TARGETS_DIR),
            overrides_dir: data_dir.join(OVERRIDES_DIR),
        }
    }

    /// Returns the targets directory path
    pub fn targets_dir(&self) -> &Path {
        &self.targets_dir
    }

    /// Returns the overrides directory path
    pub fn overrides_dir(&self) -> &Path {
        &self.overrides_dir
    }

    /// Loads all declarations.
    ///
    /// Missing directories load as empty; malformed files abort the load
    /// with `FORM_MALFORMED_MODEL`.
    pub fn load_all(&self) -> ModelResult<(TargetRegistry, OverrideStore)> {
        let mut registry = TargetRegistry::new();
        for path in json_files(&self.targets_dir)? {
            let model: TargetModel = read_json(&path)?;
            registry.register(model).map_err(|e| match e {
                // Re-key duplicate/structure failures to the offending file
                ModelError::MalformedModel { reason, .. } => ModelError::MalformedModel {
                    path: path.display().to_string(),
                    reason,
                },
                other => other,
            })?;
        }

        let mut store = OverrideStore::new();
        for path in json_files(&self.overrides_dir)? {
            let set: OverrideSet = read_json(&path)?;
            store.register(set, &registry)?;
        }

        logger::info(
            "declarations_loaded",
            &[
                ("targets", &registry.target_count().to_string()),
                ("override_targets", &store.target_count().to_string()),
            ],
        );

        Ok((registry, store))
    }
}

/// Lists `*.json` files under a directory in sorted path order
fn json_files(dir: &Path) -> ModelResult<Vec<PathBuf>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(dir).map_err(|e| ModelError::MalformedModel {
        path: dir.display().to_string(),
        reason: format!("failed to read directory: {}", e),
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ModelError::MalformedModel {
            path: dir.display().to_string(),
            reason: format!("failed to read directory entry: {}", e),
        })?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}

/// Parses one declaration file
fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> ModelResult<T> {
    let content = fs::read_to_string(path).map_err(|e| ModelError::MalformedModel {
        path: path.display().to_string(),
        reason: format!("failed to read file: {}", e),
    })?;

    serde_json::from_str(&content).map_err(|e| ModelError::MalformedModel {
        path: path.display().to_string(),
        reason: format!("invalid JSON: {}", e),
    })
}
