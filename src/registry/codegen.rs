//! Emission of the generated registry module.
//!
//! The output is a plain Rust source file declaring the registry as a frozen
//! `static` slice, so the bundled data is type-checked at compile time and
//! cannot be mutated at run time.

use std::fs;
use std::path::Path;

use tracing::info;

use super::entry::PackageCard;
use super::scan::RegistryError;

/// First line of every generated module; its presence marks the file as
/// machine-written.
pub const GENERATED_HEADER: &str = "// AUTO-GENERATED FILE - DO NOT EDIT";

/// Serializes the entries into the source text of the registry module.
///
/// String fields are emitted as Rust string literals, so embedded quotes and
/// backslashes round-trip to the identical entry set when the module is
/// compiled back in. An empty entry list produces a valid empty slice.
pub fn generate_registry_content(entries: &[PackageCard]) -> String {
    let mut out = String::new();
    out.push_str(GENERATED_HEADER);
    out.push('\n');
    out.push_str("// Regenerate with `playground generate` instead of editing by hand.\n\n");
    out.push_str("use std::borrow::Cow;\n\nuse crate::registry::PackageCard;\n\n");
    out.push_str("/// Display entries for every discovered and curated package, pre-sorted by name.\n");
    out.push_str("pub static PACKAGES: &[PackageCard] = &[\n");

    for entry in entries {
        out.push_str("    PackageCard {\n");
        out.push_str(&format!("        name: Cow::Borrowed({}),\n", quote(&entry.name)));
        out.push_str(&format!(
            "        description: Cow::Borrowed({}),\n",
            quote(&entry.description)
        ));
        out.push_str(&format!("        href: Cow::Borrowed({}),\n", quote(&entry.href)));
        match &entry.rel {
            Some(rel) => out.push_str(&format!(
                "        rel: Some(Cow::Borrowed({})),\n",
                quote(rel)
            )),
            None => out.push_str("        rel: None,\n"),
        }
        out.push_str("    },\n");
    }

    out.push_str("];\n");
    out
}

/// Writes the generated module to `path`.
///
/// The content is assembled fully in memory first, so a failed run never
/// leaves a partial module behind a successful exit.
pub fn write_registry_module(entries: &[PackageCard], path: &Path) -> Result<(), RegistryError> {
    let content = generate_registry_content(entries);
    fs::write(path, content).map_err(|source| RegistryError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "wrote registry module with {} entr{} to {}",
        entries.len(),
        if entries.len() == 1 { "y" } else { "ies" },
        path.display()
    );
    Ok(())
}

/// Escapes a string as a Rust literal, quotes included.
fn quote(value: &str) -> String {
    format!("{value:?}")
}
