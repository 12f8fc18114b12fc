//! Landing page assembly: the static splice path and the dynamic hydrate path.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use super::markup::render_cards;
use crate::registry::Registry;

/// Placeholder the template marks the card location with.
pub const CARDS_PLACEHOLDER: &str = "<!-- playground:cards -->";

/// Class of the container element the dynamic path re-renders into.
const GRID_CLASS_ATTR: &str = r#"class="project-grid""#;

/// Error type for page rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to read template {path}: {source}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("template does not contain the `<!-- playground:cards -->` placeholder")]
    MissingPlaceholder,

    #[error("failed to write page {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// An HTML page held in memory.
///
/// Two independent operations produce the same cards from the same registry:
/// [`splice`](Self::splice) fills the template placeholder once per build, and
/// [`hydrate`](Self::hydrate) replaces the grid container's children the way
/// the page script does after load. Both delegate to the shared entry ->
/// markup mapping.
#[derive(Debug, Clone)]
pub struct LandingPage {
    html: String,
}

impl LandingPage {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    pub fn from_template(path: &Path) -> Result<Self, RenderError> {
        let html = fs::read_to_string(path).map_err(|source| RenderError::TemplateRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(html))
    }

    /// Build-time path: replaces the placeholder with the card block.
    ///
    /// The result is fully navigable without script execution. A template
    /// without the placeholder is broken and is surfaced, not skipped.
    pub fn splice(&mut self, registry: &Registry) -> Result<(), RenderError> {
        if !self.html.contains(CARDS_PLACEHOLDER) {
            return Err(RenderError::MissingPlaceholder);
        }
        let block = render_cards(registry);
        self.html = self.html.replacen(CARDS_PLACEHOLDER, &block, 1);
        info!("spliced {} card(s) into page", registry.len());
        Ok(())
    }

    /// Load-time path: replaces the children of the `project-grid` container
    /// with the card block.
    ///
    /// Idempotent - hydrating again replaces the previous children rather than
    /// appending. Returns `false` without touching the page when no container
    /// exists; the statically rendered markup stays in place as the fallback.
    pub fn hydrate(&mut self, registry: &Registry) -> bool {
        match self.grid_children_span() {
            Some((start, end)) => {
                let block = render_cards(registry);
                self.html.replace_range(start..end, &block);
                debug!("hydrated grid with {} card(s)", registry.len());
                true
            }
            None => {
                debug!("no project-grid container on page; keeping static markup");
                false
            }
        }
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn write_to(&self, path: &Path) -> Result<(), RenderError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| RenderError::WriteFailed {
                path: path.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, &self.html).map_err(|source| RenderError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Byte span of the grid container's children.
    ///
    /// Cards contain only anchor, heading, and paragraph elements, so the
    /// first `</div>` after the opening tag closes the container; the grid
    /// must not hold nested `<div>`s.
    fn grid_children_span(&self) -> Option<(usize, usize)> {
        let class_at = self.html.find(GRID_CLASS_ATTR)?;
        let open_end = class_at + self.html[class_at..].find('>')? + 1;
        let close_at = open_end + self.html[open_end..].find("</div>")?;
        Some((open_end, close_at))
    }
}
