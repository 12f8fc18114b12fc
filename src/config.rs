//! Runtime configuration for the playground pipeline.
//!
//! Precedence, lowest to highest: built-in defaults, then the optional
//! `playground.json` at the repository root, then `PLAYGROUND_*` environment
//! variables, then command-line arguments (applied by the handlers).
//!
//! # Environment Variables
//!
//! - `PLAYGROUND_PACKAGES_DIR`: directory scanned for sample packages - default: "packages"
//! - `PLAYGROUND_TEMPLATE`: landing page template - default: "templates/index.html"
//! - `PLAYGROUND_PAGE_OUT`: rendered page destination - default: "dist/index.html"
//! - `PLAYGROUND_REGISTRY_OUT`: generated module destination - default: "src/registry/generated.rs"
//! - `PLAYGROUND_LOG_LEVEL`: logging level - default: "info" (read at startup)

use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::registry::PackageCard;
use crate::util::json;

/// Optional configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "playground.json";

/// Default values for configuration
const DEFAULT_PACKAGES_DIR: &str = "packages";
const DEFAULT_TEMPLATE: &str = "templates/index.html";
const DEFAULT_PAGE_OUT: &str = "dist/index.html";
const DEFAULT_REGISTRY_OUT: &str = "src/registry/generated.rs";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("configuration validation failed: {0}")]
    Invalid(String),
}

/// Main configuration structure for the playground pipeline.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlaygroundConfig {
    /// Directory scanned for candidate sample packages
    pub packages_dir: PathBuf,

    /// Landing page template with the cards placeholder
    pub template: PathBuf,

    /// Destination of the rendered static page
    pub page_out: PathBuf,

    /// Destination of the generated registry module
    pub registry_out: PathBuf,

    /// Hand-curated entries merged into every registry build. These bypass
    /// directory scanning: the external server samples live at their own
    /// origins, not under the packages directory.
    pub curated: Vec<PackageCard>,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            packages_dir: PathBuf::from(DEFAULT_PACKAGES_DIR),
            template: PathBuf::from(DEFAULT_TEMPLATE),
            page_out: PathBuf::from(DEFAULT_PAGE_OUT),
            registry_out: PathBuf::from(DEFAULT_REGISTRY_OUT),
            curated: default_curated(),
        }
    }
}

/// The two server samples, reachable at their own origins.
fn default_curated() -> Vec<PackageCard> {
    vec![
        PackageCard::external(
            "Express Sample",
            "Node.js web framework",
            "http://localhost:3001",
            "noopener noreferrer",
        ),
        PackageCard::external(
            "Nest.js Sample",
            "TypeScript server-side framework",
            "http://localhost:3002",
            "noopener noreferrer",
        ),
    ]
}

impl PlaygroundConfig {
    /// Loads configuration from `playground.json` in the working directory
    /// (when present) and applies environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Path::new(CONFIG_FILE);
        let mut config = if path.is_file() {
            Self::from_file(path)?
        } else {
            Self::default()
        };
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file. Parsing is lenient: config files may carry
    /// comment lines.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        json::from_str_lenient(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Applies `PLAYGROUND_*` environment overrides.
    fn apply_env(&mut self) {
        for (var, field) in [
            ("PLAYGROUND_PACKAGES_DIR", &mut self.packages_dir),
            ("PLAYGROUND_TEMPLATE", &mut self.template),
            ("PLAYGROUND_PAGE_OUT", &mut self.page_out),
            ("PLAYGROUND_REGISTRY_OUT", &mut self.registry_out),
        ] {
            if let Ok(value) = env::var(var) {
                if !value.is_empty() {
                    *field = PathBuf::from(value);
                }
            }
        }
    }

    /// Rejects configurations that cannot produce a usable registry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.packages_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("packagesDir must not be empty".into()));
        }
        if self.template.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("template must not be empty".into()));
        }
        for entry in &self.curated {
            if entry.name.is_empty() || entry.href.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "curated entry {:?} needs a non-empty name and href",
                    entry.name
                )));
            }
        }
        Ok(())
    }
}
