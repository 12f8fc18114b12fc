//! Package manifest types (`package.json`).

use serde::Deserialize;

/// The subset of a `package.json` the registry reads.
///
/// `name` is required; everything else is optional and resolved through the
/// fallback precedence in [`super::extract_metadata`]. Unknown fields
/// (scripts, dependencies, ...) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageManifest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "playgroundMeta")]
    pub playground_meta: Option<PlaygroundMeta>,
}

/// Optional display override block.
///
/// Lets a package specify a friendlier title and description than its machine
/// identifier, without touching the npm-facing fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaygroundMeta {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl PackageManifest {
    /// Strict parse: a malformed manifest or one missing `name` is an error,
    /// never silently skipped.
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        crate::util::json::from_str_strict(content)
    }
}
