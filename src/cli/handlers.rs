//! Command handlers. Each returns a process exit code; failures are logged
//! and surfaced to the operator rather than panicking.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, error, info};

use super::commands::{GenerateArgs, ListArgs, RenderArgs};
use super::output::OutputFormatter;
use crate::config::PlaygroundConfig;
use crate::registry::{scan_packages, write_registry_module, Registry};
use crate::render::LandingPage;

pub fn handle_generate(args: &GenerateArgs) -> i32 {
    match run_generate(args) {
        Ok(()) => 0,
        Err(e) => {
            error!("{e:#}");
            1
        }
    }
}

pub fn handle_render(args: &RenderArgs) -> i32 {
    match run_render(args) {
        Ok(()) => 0,
        Err(e) => {
            error!("{e:#}");
            1
        }
    }
}

pub fn handle_list(args: &ListArgs) -> i32 {
    match run_list(args) {
        Ok(output) => {
            println!("{output}");
            0
        }
        Err(e) => {
            error!("{e:#}");
            1
        }
    }
}

fn run_generate(args: &GenerateArgs) -> Result<()> {
    let config = load_config()?;
    let registry = build_registry(&config, args.packages_dir.clone(), false, args.no_curated)?;

    let out = args.out.clone().unwrap_or_else(|| config.registry_out.clone());
    write_registry_module(registry.entries(), &out)?;
    Ok(())
}

fn run_render(args: &RenderArgs) -> Result<()> {
    let config = load_config()?;
    let registry = build_registry(
        &config,
        args.packages_dir.clone(),
        args.bundled,
        args.no_curated,
    )?;

    let template = args.template.clone().unwrap_or_else(|| config.template.clone());
    let mut page = LandingPage::from_template(&template)?;
    page.splice(&registry)?;

    let out = args.out.clone().unwrap_or_else(|| config.page_out.clone());
    page.write_to(&out)?;
    info!(
        "rendered {} card(s) to {}",
        registry.len(),
        out.display()
    );
    Ok(())
}

fn run_list(args: &ListArgs) -> Result<String> {
    let config = load_config()?;
    let registry = build_registry(
        &config,
        args.packages_dir.clone(),
        args.bundled,
        args.no_curated,
    )?;
    OutputFormatter::new(args.format.into()).format(&registry)
}

fn load_config() -> Result<PlaygroundConfig> {
    let config = PlaygroundConfig::load().context("Failed to load configuration")?;
    debug!("Configuration: {:?}", config);
    Ok(config)
}

/// Builds the registry a command operates on: scanned entries plus the
/// curated external ones, or the bundled table when `bundled` is set.
fn build_registry(
    config: &PlaygroundConfig,
    packages_dir: Option<PathBuf>,
    bundled: bool,
    no_curated: bool,
) -> Result<Registry> {
    if bundled {
        debug!("using bundled registry");
        return Ok(Registry::bundled());
    }

    let packages_dir = packages_dir.unwrap_or_else(|| config.packages_dir.clone());
    let mut entries = scan_packages(&packages_dir)?;
    if !no_curated {
        entries.extend(config.curated.iter().cloned());
    }
    Ok(Registry::from_entries(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::PackageCard;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_build_registry_merges_curated_and_sorts() {
        let tmp = TempDir::new().unwrap();
        let pkg = tmp.path().join("react-sample");
        fs::create_dir_all(&pkg).unwrap();
        fs::write(
            pkg.join("package.json"),
            r#"{"name": "react-sample", "description": "React app"}"#,
        )
        .unwrap();

        let config = PlaygroundConfig::default();
        let registry =
            build_registry(&config, Some(tmp.path().to_path_buf()), false, false).unwrap();

        let names: Vec<_> = registry.iter().map(|e| e.name.as_ref()).collect();
        assert_eq!(names, ["Express Sample", "Nest.js Sample", "React Sample"]);
    }

    #[test]
    fn test_build_registry_without_curated() {
        let tmp = TempDir::new().unwrap();
        let config = PlaygroundConfig::default();
        let registry =
            build_registry(&config, Some(tmp.path().to_path_buf()), false, true).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_build_registry_bundled_skips_scanning() {
        let config = PlaygroundConfig {
            packages_dir: PathBuf::from("/nonexistent"),
            ..Default::default()
        };
        let registry = build_registry(&config, None, true, false).unwrap();
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_curated_entries_keep_their_rel() {
        let tmp = TempDir::new().unwrap();
        let config = PlaygroundConfig::default();
        let registry =
            build_registry(&config, Some(tmp.path().to_path_buf()), false, false).unwrap();

        let express: &PackageCard = registry
            .iter()
            .find(|e| e.name == "Express Sample")
            .unwrap();
        assert_eq!(express.rel.as_deref(), Some("noopener noreferrer"));
    }
}
