//! CLI command implementations
//!
//! Commands are thin: load declarations through `ModelLoader`, act, print.
//! All output that consumers might parse (list, inspect) is deterministic.

use std::fs;
use std::path::Path;

use crate::descriptor::{DescriptorBuilder, DescriptorCache};
use crate::model::{ModelLoader, TargetRegistry};
use crate::observability::logger;
use crate::overrides::OverrideStore;
use crate::rules::RuleRegistry;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parses arguments and dispatches to the matching command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Init { data_dir } => init(&data_dir),
        Command::List { data_dir } => list(&data_dir),
        Command::Check { data_dir } => check(&data_dir),
        Command::Inspect {
            data_dir,
            target,
            pretty,
        } => inspect(&data_dir, &target, pretty),
    }
}

/// Creates the data directory layout
pub fn init(data_dir: &Path) -> CliResult<()> {
    let loader = ModelLoader::new(data_dir);
    if loader.targets_dir().exists() {
        return Err(CliError::already_initialized(data_dir.display()));
    }

    fs::create_dir_all(loader.targets_dir())?;
    fs::create_dir_all(loader.overrides_dir())?;

    logger::info("data_dir_initialized", &[("path", &data_dir.display().to_string())]);
    Ok(())
}

/// Prints declared target ids, one per line, sorted
pub fn list(data_dir: &Path) -> CliResult<()> {
    let (registry, _) = load(data_dir)?;

    for target_id in registry.target_ids() {
        println!("{}", target_id);
    }
    Ok(())
}

/// Builds every declared descriptor, surfacing the first failure
pub fn check(data_dir: &Path) -> CliResult<()> {
    let (registry, overrides) = load(data_dir)?;
    let rules = RuleRegistry::with_stock_rules();
    let builder = DescriptorBuilder::new(&rules, &registry, &overrides);
    let cache = DescriptorCache::new();

    for target_id in registry.target_ids() {
        cache.get(&builder, target_id)?;
    }

    logger::info(
        "check_passed",
        &[("targets", &registry.target_count().to_string())],
    );
    Ok(())
}

/// Prints the descriptor JSON for one target
pub fn inspect(data_dir: &Path, target: &str, pretty: bool) -> CliResult<()> {
    let (registry, overrides) = load(data_dir)?;
    let rules = RuleRegistry::with_stock_rules();
    let builder = DescriptorBuilder::new(&rules, &registry, &overrides);

    let descriptor = builder.build(target)?;
    let json = if pretty {
        descriptor.to_json_pretty()?
    } else {
        descriptor.to_json()?
    };
    println!("{}", json);
    Ok(())
}

/// Loads declarations, requiring an initialized data directory
fn load(data_dir: &Path) -> CliResult<(TargetRegistry, OverrideStore)> {
    let loader = ModelLoader::new(data_dir);
    if !loader.targets_dir().exists() {
        return Err(CliError::not_initialized(data_dir.display()));
    }
    Ok(loader.load_all()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FieldDecl, TargetModel};
    use tempfile::TempDir;

    fn write_target(data_dir: &Path, model: &TargetModel) {
        let dir = data_dir.join("targets");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(format!("{}.json", model.target_id)),
            serde_json::to_string_pretty(model).unwrap(),
        )
        .unwrap();
    }

    #[test]
    fn test_init_creates_layout() {
        let tmp = TempDir::new().unwrap();
        let data_dir = tmp.path().join("data");

        init(&data_dir).unwrap();
        assert!(data_dir.join("targets").is_dir());
        assert!(data_dir.join("overrides").is_dir());
    }

    #[test]
    fn test_init_refuses_twice() {
        let tmp = TempDir::new().unwrap();
        let data_dir = tmp.path().join("data");

        init(&data_dir).unwrap();
        let err = init(&data_dir).unwrap_err();
        assert!(err.to_string().contains("FORM_CLI_ALREADY_INITIALIZED"));
    }

    #[test]
    fn test_commands_require_initialized_dir() {
        let tmp = TempDir::new().unwrap();
        let data_dir = tmp.path().join("missing");

        let err = list(&data_dir).unwrap_err();
        assert!(err.to_string().contains("FORM_CLI_NOT_INITIALIZED"));
    }

    #[test]
    fn test_check_builds_all_targets() {
        let tmp = TempDir::new().unwrap();
        init(tmp.path()).unwrap();
        write_target(
            tmp.path(),
            &TargetModel::new("Account", vec![FieldDecl::scalar("Name")]),
        );

        assert!(check(tmp.path()).is_ok());
    }

    #[test]
    fn test_check_surfaces_missing_child_target() {
        let tmp = TempDir::new().unwrap();
        init(tmp.path()).unwrap();
        write_target(
            tmp.path(),
            &TargetModel::new(
                "Order",
                vec![FieldDecl::composite("Buyer", "MissingModel").with_composition(
                    crate::model::CompositionMark::Continue,
                )],
            ),
        );

        let err = check(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("FORM_UNKNOWN_TARGET"));
    }
}
