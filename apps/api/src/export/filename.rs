//! Download filename derivation.

use crate::models::export::DocType;

pub const DOCX_EXTENSION: &str = "docx";

/// Replaces every character outside `[A-Za-z0-9_-]` with `_`.
pub fn sanitize_file_stem(stem: &str) -> String {
    stem.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Builds `<stem>.<extension>` from the requested name, falling back to the
/// doc type when no name (or an empty one) was given.
pub fn export_file_name(requested: Option<&str>, doc_type: DocType, extension: &str) -> String {
    let stem = requested
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| doc_type.as_str());
    format!("{}.{}", sanitize_file_stem(stem), extension)
}
