//! Display-name derivation from package identifiers.

/// Turns a package identifier into a human-readable title.
///
/// Strips a leading `@scope/` prefix, splits the remainder on hyphens, and
/// upper-cases the first character of each word, preserving the rest:
/// `"react-sample"` -> `"React Sample"`, `"@scope/package-name"` ->
/// `"Package Name"`.
pub fn clean_package_name(identifier: &str) -> String {
    let bare = if identifier.starts_with('@') {
        match identifier.find('/') {
            Some(slash) => &identifier[slash + 1..],
            None => identifier,
        }
    } else {
        identifier
    };

    bare.split('-')
        .filter(|word| !word.is_empty())
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
