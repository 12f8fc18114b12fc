//! web-playground - registry generation and card rendering for the playground landing page
//!
//! This library implements the landing page's data pipeline: it scans a
//! directory of sample packages, extracts display metadata from each package
//! manifest, and renders the result as navigable cards.
//!
//! # Core Concepts
//!
//! - **Manifest**: per-package `package.json` metadata (name, description,
//!   optional `playgroundMeta` display overrides)
//! - **Registry**: the sorted, immutable list of [`PackageCard`] entries that
//!   every renderer consumes
//! - **Card**: the rendered anchor element for one entry - a heading with the
//!   display name and a paragraph with the description
//!
//! # Example Usage
//!
//! ```no_run
//! use web_playground::{LandingPage, Registry};
//! use std::path::Path;
//!
//! fn build_page() -> Result<String, Box<dyn std::error::Error>> {
//!     // Scan the packages directory into a sorted registry
//!     let entries = web_playground::scan_packages(Path::new("packages"))?;
//!     let registry = Registry::from_entries(entries);
//!
//!     // Splice the cards into the page template
//!     let mut page = LandingPage::from_template(Path::new("templates/index.html"))?;
//!     page.splice(&registry)?;
//!
//!     Ok(page.html().to_string())
//! }
//! ```
//!
//! # Project Structure
//!
//! - [`registry`]: directory scanning, metadata extraction, and generation of
//!   the static registry module
//! - [`render`]: card markup plus the static (splice) and dynamic (hydrate)
//!   rendering paths
//! - [`config`]: runtime configuration with file and environment overrides
//! - [`cli`]: command definitions and output formatting for the binary

// Public modules
pub mod cli;
pub mod config;
pub mod registry;
pub mod render;
pub mod util;

// Re-export key types for convenient access
pub use config::{ConfigError, PlaygroundConfig};
pub use registry::{
    clean_package_name, extract_metadata, generate_registry_content, scan_packages, PackageCard,
    PackageManifest, Registry, RegistryError,
};
pub use render::{render_cards, LandingPage, RenderError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
