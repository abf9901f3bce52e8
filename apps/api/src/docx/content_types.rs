//! [Content_Types].xml generation

use crate::docx::namespaces;

pub const RELATIONSHIPS: &str = "application/vnd.openxmlformats-package.relationships+xml";
pub const XML: &str = "application/xml";
pub const DOCUMENT_MAIN: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
pub const STYLES: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml";
pub const NUMBERING: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml";
pub const SETTINGS: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.settings+xml";
pub const CORE_PROPERTIES: &str = "application/vnd.openxmlformats-package.core-properties+xml";

/// Content types of the parts in a package, in insertion order
#[derive(Debug, Clone, Default)]
pub struct ContentTypes {
    /// Default content types by extension (e.g., "xml" -> "application/xml")
    defaults: Vec<(String, String)>,
    /// Override content types by part name (e.g., "/word/document.xml" -> "...")
    overrides: Vec<(String, String)>,
}

impl ContentTypes {
    /// Create a ContentTypes with the `rels` and `xml` defaults
    pub fn new() -> Self {
        let mut ct = Self::default();
        ct.defaults.push(("rels".to_string(), RELATIONSHIPS.to_string()));
        ct.defaults.push(("xml".to_string(), XML.to_string()));
        ct
    }

    /// Add an override for a specific part; a leading `/` is added if missing
    pub fn add_override(&mut self, part_name: &str, content_type: &str) {
        let normalized = if part_name.starts_with('/') {
            part_name.to_string()
        } else {
            format!("/{}", part_name)
        };
        self.overrides.retain(|(part, _)| *part != normalized);
        self.overrides.push((normalized, content_type.to_string()));
    }

    /// Get the content type for a given part path
    #[cfg(test)]
    pub fn get_content_type(&self, path: &str) -> Option<&str> {
        let normalized = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };

        if let Some((_, ct)) = self.overrides.iter().find(|(part, _)| *part == normalized) {
            return Some(ct);
        }

        let ext = path.rsplit('.').next()?;
        self.defaults
            .iter()
            .find(|(e, _)| e == ext)
            .map(|(_, ct)| ct.as_str())
    }

    /// Generate XML content for [Content_Types].xml
    pub fn to_xml(&self) -> String {
        let mut xml = String::new();
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<Types xmlns="{}">"#, namespaces::CONTENT_TYPES));

        for (ext, ct) in &self.defaults {
            xml.push_str(&format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                ext, ct
            ));
        }

        for (part, ct) in &self.overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                part, ct
            ));
        }

        xml.push_str("</Types>");
        xml
    }
}
