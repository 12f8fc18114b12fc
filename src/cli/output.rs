//! Output formatting for the `list` command.

use anyhow::{Context, Result};
use std::fmt::Write as _;

use crate::registry::Registry;

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable formatted text
    Human,
    /// JSON format (machine-readable)
    Json,
}

/// Formatter for registry listings
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self, registry: &Registry) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_json(registry),
            OutputFormat::Human => self.format_human(registry),
        }
    }

    fn format_json(&self, registry: &Registry) -> Result<String> {
        serde_json::to_string_pretty(registry.entries())
            .context("Failed to serialize registry to JSON")
    }

    fn format_human(&self, registry: &Registry) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "{} package(s)", registry.len())?;
        for entry in registry {
            writeln!(out)?;
            if entry.description.is_empty() {
                writeln!(out, "  {}", entry.name)?;
            } else {
                writeln!(out, "  {} - {}", entry.name, entry.description)?;
            }
            match &entry.rel {
                Some(rel) => writeln!(out, "    {} (rel: {})", entry.href, rel)?,
                None => writeln!(out, "    {}", entry.href)?,
            }
        }
        Ok(out)
    }
}
