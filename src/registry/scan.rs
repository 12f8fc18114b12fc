//! Package scanning and metadata extraction.

use std::fs;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use thiserror::Error;
use tracing::{debug, info};

use super::entry::{compare_names, PackageCard};
use super::manifest::PackageManifest;
use super::name::clean_package_name;

/// Manifest file that marks a subdirectory as a candidate package.
pub const MANIFEST_FILE: &str = "package.json";

/// Error type for registry generation.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("packages directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("failed to walk packages directory {path}: {reason}")]
    ScanFailed { path: PathBuf, reason: String },

    #[error("failed to read manifest {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse manifest {path}: {reason}")]
    ManifestParse { path: PathBuf, reason: String },

    #[error("failed to write registry module {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Scans `root` for candidate packages and returns their display entries,
/// sorted by name.
///
/// Only immediate subdirectories are considered. A subdirectory without a
/// `package.json` is auxiliary content and is skipped; a malformed manifest
/// (or one missing `name`) aborts the run with the offending path. An empty
/// or package-less directory yields an empty list.
pub fn scan_packages(root: &Path) -> Result<Vec<PackageCard>, RegistryError> {
    if !root.is_dir() {
        return Err(RegistryError::DirectoryNotFound(root.to_path_buf()));
    }

    // Candidate discovery must not depend on gitignore state, only on the
    // directory contents themselves; hidden directories stay excluded.
    let walker = WalkBuilder::new(root)
        .max_depth(Some(1))
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .parents(false)
        .build();

    let mut entries = Vec::new();
    for result in walker {
        let dent = result.map_err(|e| RegistryError::ScanFailed {
            path: root.to_path_buf(),
            reason: e.to_string(),
        })?;
        if dent.depth() == 0 || !dent.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            continue;
        }

        let manifest_path = dent.path().join(MANIFEST_FILE);
        if !manifest_path.is_file() {
            debug!("skipping {}: no {}", dent.path().display(), MANIFEST_FILE);
            continue;
        }

        let content =
            fs::read_to_string(&manifest_path).map_err(|source| RegistryError::ManifestRead {
                path: manifest_path.clone(),
                source,
            })?;
        let manifest =
            PackageManifest::from_json(&content).map_err(|e| RegistryError::ManifestParse {
                path: manifest_path.clone(),
                reason: e.to_string(),
            })?;

        let dir_name = dent.file_name().to_string_lossy();
        entries.push(extract_metadata(&manifest, &dir_name));
    }

    entries.sort_by(|a, b| compare_names(&a.name, &b.name));
    info!(
        "scanned {} package(s) under {}",
        entries.len(),
        root.display()
    );
    Ok(entries)
}

/// Derives the display entry for one manifest. Pure: no I/O.
///
/// Precedence: `playgroundMeta.title` (when non-empty) wins over the cleaned
/// package name; `playgroundMeta.description` (when non-empty) wins over the
/// manifest description, which falls back to empty. The `href` is always
/// `{dir_name}/index.html` - the directory name is authoritative for path
/// construction, independent of the manifest's declared name.
pub fn extract_metadata(manifest: &PackageManifest, dir_name: &str) -> PackageCard {
    let meta = manifest.playground_meta.as_ref();

    let name = meta
        .and_then(|m| m.title.as_deref())
        .filter(|title| !title.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| clean_package_name(&manifest.name));

    let description = meta
        .and_then(|m| m.description.as_deref())
        .filter(|description| !description.is_empty())
        .or(manifest.description.as_deref())
        .unwrap_or("")
        .to_owned();

    PackageCard::new(name, description, format!("{dir_name}/index.html"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_package(root: &Path, dir: &str, manifest: &str) {
        let pkg_dir = root.join(dir);
        fs::create_dir_all(&pkg_dir).unwrap();
        fs::write(pkg_dir.join(MANIFEST_FILE), manifest).unwrap();
    }

    #[test]
    fn test_scan_returns_package_metadata() {
        let tmp = TempDir::new().unwrap();
        write_package(
            tmp.path(),
            "test-package",
            r#"{"name": "test-package", "description": "A test package"}"#,
        );

        let result = scan_packages(tmp.path()).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(
            result[0],
            PackageCard::new("Test Package", "A test package", "test-package/index.html")
        );
    }

    #[test]
    fn test_scan_skips_directories_without_manifest() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("not-a-package")).unwrap();
        fs::write(tmp.path().join("not-a-package/README.md"), "docs").unwrap();

        let result = scan_packages(tmp.path()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_scan_ignores_plain_files_in_root() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(MANIFEST_FILE), r#"{"name": "root"}"#).unwrap();

        let result = scan_packages(tmp.path()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_scan_sorts_alphabetically_by_display_name() {
        let tmp = TempDir::new().unwrap();
        for (dir, description) in [
            ("zebra-pkg", "Z package"),
            ("alpha-pkg", "A package"),
            ("mid-pkg", "M package"),
        ] {
            write_package(
                tmp.path(),
                dir,
                &format!(r#"{{"name": "{dir}", "description": "{description}"}}"#),
            );
        }

        let result = scan_packages(tmp.path()).unwrap();
        let names: Vec<_> = result.iter().map(|e| e.name.as_ref()).collect();
        assert_eq!(names, ["Alpha Pkg", "Mid Pkg", "Zebra Pkg"]);
        for (entry, dir) in result.iter().zip(["alpha-pkg", "mid-pkg", "zebra-pkg"]) {
            assert_eq!(entry.href, format!("{dir}/index.html"));
        }
    }

    #[test]
    fn test_scan_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        write_package(tmp.path(), "b-pkg", r#"{"name": "b-pkg"}"#);
        write_package(tmp.path(), "a-pkg", r#"{"name": "a-pkg"}"#);

        let first = scan_packages(tmp.path()).unwrap();
        let second = scan_packages(tmp.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_scan_uses_playground_meta() {
        let tmp = TempDir::new().unwrap();
        write_package(
            tmp.path(),
            "custom-pkg",
            r#"{
                "name": "custom-pkg",
                "description": "npm description",
                "playgroundMeta": {
                    "title": "Custom Display Name",
                    "description": "Custom playground description"
                }
            }"#,
        );

        let result = scan_packages(tmp.path()).unwrap();
        assert_eq!(
            result[0],
            PackageCard::new(
                "Custom Display Name",
                "Custom playground description",
                "custom-pkg/index.html"
            )
        );
    }

    #[test]
    fn test_scan_empty_directory() {
        let tmp = TempDir::new().unwrap();
        assert!(scan_packages(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_scan_missing_root_is_an_error() {
        let err = scan_packages(Path::new("/nonexistent/packages")).unwrap_err();
        assert!(matches!(err, RegistryError::DirectoryNotFound(_)));
    }

    #[test]
    fn test_malformed_manifest_aborts_with_path() {
        let tmp = TempDir::new().unwrap();
        write_package(tmp.path(), "good-pkg", r#"{"name": "good-pkg"}"#);
        write_package(tmp.path(), "broken-pkg", "{not json");

        let err = scan_packages(tmp.path()).unwrap_err();
        match err {
            RegistryError::ManifestParse { path, .. } => {
                assert!(path.ends_with("broken-pkg/package.json"));
            }
            other => panic!("expected ManifestParse, got {other:?}"),
        }
    }

    #[test]
    fn test_manifest_without_name_aborts() {
        let tmp = TempDir::new().unwrap();
        write_package(tmp.path(), "anon-pkg", r#"{"description": "nameless"}"#);

        let err = scan_packages(tmp.path()).unwrap_err();
        assert!(matches!(err, RegistryError::ManifestParse { .. }));
    }

    #[test]
    fn test_hidden_directories_are_not_candidates() {
        let tmp = TempDir::new().unwrap();
        write_package(tmp.path(), ".hidden-pkg", r#"{"name": "hidden-pkg"}"#);

        let result = scan_packages(tmp.path()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_extract_metadata_fallback_chain() {
        let manifest = PackageManifest::from_json(
            r#"{"name": "react-sample", "description": "npm description"}"#,
        )
        .unwrap();
        assert_eq!(
            extract_metadata(&manifest, "react-sample"),
            PackageCard::new("React Sample", "npm description", "react-sample/index.html")
        );
    }

    #[test]
    fn test_extract_metadata_defaults_description_to_empty() {
        let manifest = PackageManifest::from_json(r#"{"name": "my-package"}"#).unwrap();
        assert_eq!(
            extract_metadata(&manifest, "my-package"),
            PackageCard::new("My Package", "", "my-package/index.html")
        );
    }

    #[test]
    fn test_extract_metadata_partial_meta_falls_back_per_field() {
        let manifest = PackageManifest::from_json(
            r#"{
                "name": "react-sample",
                "description": "npm description",
                "playgroundMeta": {"title": "Custom Title Only"}
            }"#,
        )
        .unwrap();
        assert_eq!(
            extract_metadata(&manifest, "react-sample"),
            PackageCard::new(
                "Custom Title Only",
                "npm description",
                "react-sample/index.html"
            )
        );
    }

    #[test]
    fn test_extract_metadata_empty_title_counts_as_absent() {
        let manifest = PackageManifest::from_json(
            r#"{"name": "react-sample", "playgroundMeta": {"title": ""}}"#,
        )
        .unwrap();
        assert_eq!(
            extract_metadata(&manifest, "react-sample").name,
            "React Sample"
        );
    }

    #[test]
    fn test_extract_metadata_href_uses_directory_name() {
        // The directory name wins over the manifest's declared name
        let manifest = PackageManifest::from_json(r#"{"name": "@scope/renamed"}"#).unwrap();
        assert_eq!(
            extract_metadata(&manifest, "actual-dir").href,
            "actual-dir/index.html"
        );
    }
}
