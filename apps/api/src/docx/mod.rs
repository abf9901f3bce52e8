//! Minimal WordprocessingML (DOCX) packager.
//!
//! A DOCX file is a ZIP archive of XML parts:
//! - `[Content_Types].xml` - content type for every part
//! - `_rels/.rels` - package relationships
//! - `docProps/core.xml` - title metadata
//! - `word/document.xml` - paragraphs, runs and page setup
//! - `word/styles.xml` - document defaults plus the `ListBullet` style
//! - `word/numbering.xml` - the bullet definition behind `ListBullet`
//! - `word/settings.xml` - compatibility mode
//! - `word/_rels/document.xml.rels` - links from the document to its parts
//!
//! Only what the export builder produces is supported: paragraphs of styled
//! runs, centered alignment, spacing after, and single-level bullets.

mod content_types;
mod document_writer;
mod error;
pub mod model;
mod numbering_writer;
#[cfg(test)]
pub mod reader;
mod relationships;
mod styles_writer;
mod writer;

pub use error::{DocxError, DocxResult};
pub use model::{Document, Paragraph, Run};
pub use writer::to_bytes;

use std::borrow::Cow;

/// MIME type of a `.docx` file.
pub const DOCX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// XML namespaces used by the generated parts.
pub(crate) mod namespaces {
    pub const W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
    pub const R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
    pub const PACKAGE_RELATIONSHIPS: &str =
        "http://schemas.openxmlformats.org/package/2006/relationships";
    pub const CONTENT_TYPES: &str = "http://schemas.openxmlformats.org/package/2006/content-types";
    pub const CORE_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/package/2006/metadata/core-properties";
    pub const DC: &str = "http://purl.org/dc/elements/1.1/";
}

/// Relationship type URIs.
pub(crate) mod relationship_types {
    pub const DOCUMENT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    pub const CORE_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
    pub const STYLES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
    pub const NUMBERING: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering";
    pub const SETTINGS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/settings";
}

/// Characters allowed by the XML 1.0 `Char` production.
pub(crate) fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\u{9}' | '\u{A}' | '\u{D}'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Drops characters no XML 1.0 document may contain, even escaped.
/// Text that is already clean is borrowed unchanged.
pub(crate) fn strip_invalid_xml_chars(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_xml_char) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.chars().filter(|&c| is_xml_char(c)).collect())
    }
}

/// Points to twentieths of a point (the OOXML spacing unit).
pub(crate) fn pt_to_twips(pt: f32) -> i32 {
    (pt * 20.0).round() as i32
}

/// Inches to twips.
pub(crate) fn in_to_twips(inches: f32) -> i32 {
    (inches * 1440.0).round() as i32
}

/// Points to half-points (the OOXML font size unit).
pub(crate) fn pt_to_half_points(pt: f32) -> u32 {
    (pt * 2.0).round() as u32
}
