//! Display entries and the sorted registry collection.

use std::borrow::Cow;
use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::generated;

/// One navigable card on the landing page.
///
/// Scanned entries always carry an `href` of `{directory}/index.html`;
/// hand-curated entries (the external server samples) carry an absolute URL
/// and a `rel` attribute instead. Fields are `Cow` so the generated module can
/// declare a heap-free `static` table while runtime construction owns its
/// strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageCard {
    /// Display name (e.g., "React Sample")
    pub name: Cow<'static, str>,
    /// Brief technology description; may be empty
    pub description: Cow<'static, str>,
    /// Relative `{directory}/index.html` path or an absolute external URL
    pub href: Cow<'static, str>,
    /// Link-relation attribute, present only for external entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rel: Option<Cow<'static, str>>,
}

impl PackageCard {
    /// Card for a scanned package directory.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
        href: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            href: href.into(),
            rel: None,
        }
    }

    /// Card for a hand-curated external target, with a `rel` attribute.
    pub fn external(
        name: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
        href: impl Into<Cow<'static, str>>,
        rel: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            href: href.into(),
            rel: Some(rel.into()),
        }
    }
}

/// Name ordering used everywhere a registry is sorted.
///
/// Comparison must not depend on the host locale (re-running generation over
/// unchanged inputs has to produce byte-identical output on every machine), so
/// entries compare by lowercased codepoints, tie-broken by the exact name.
pub(crate) fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// The sorted, immutable list of display entries consumed by rendering.
///
/// Constructed fresh on every generation run; consumers only read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    entries: Vec<PackageCard>,
}

impl Registry {
    /// Sorts the entries by display name and freezes them.
    pub fn from_entries(mut entries: Vec<PackageCard>) -> Self {
        entries.sort_by(|a, b| compare_names(&a.name, &b.name));
        Self { entries }
    }

    /// The registry bundled into the binary from the generated module.
    ///
    /// This is the data source the dynamic render path uses, mirroring the
    /// page importing its generated registry at load time.
    pub fn bundled() -> Self {
        Self::from_entries(generated::PACKAGES.to_vec())
    }

    pub fn entries(&self) -> &[PackageCard] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PackageCard> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a PackageCard;
    type IntoIter = std::slice::Iter<'a, PackageCard>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
