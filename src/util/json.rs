//! Structured-config JSON loading.
//!
//! Two modes: strict for package manifests (malformed input must fail
//! loudly), lenient for configuration files, which may carry `//` and
//! `/* ... */` annotation lines.

use serde::de::DeserializeOwned;

/// Strict parse; any malformed input is an error.
pub fn from_str_strict<T: DeserializeOwned>(content: &str) -> serde_json::Result<T> {
    serde_json::from_str(content)
}

/// Lenient parse: tries standard JSON first, then retries with comment lines
/// stripped. The error of the stripped attempt is returned when both fail.
pub fn from_str_lenient<T: DeserializeOwned>(content: &str) -> serde_json::Result<T> {
    match serde_json::from_str(content) {
        Ok(value) => Ok(value),
        Err(_) => serde_json::from_str(&strip_comment_lines(content)),
    }
}

/// Blanks out whole-line `//` comments and single-line `/* ... */` blocks.
/// Inline trailing comments are left alone - they would be ambiguous with
/// `//` inside string values.
fn strip_comment_lines(content: &str) -> String {
    content
        .lines()
        .map(|line| {
            let trimmed = line.trim();
            if trimmed.starts_with("//") || (trimmed.starts_with("/*") && trimmed.ends_with("*/")) {
                ""
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
