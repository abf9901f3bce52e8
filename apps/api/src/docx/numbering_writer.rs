//! Numbering.xml writer
//!
//! Defines the single-level bullet list used by the `ListBullet` style.

use crate::docx::namespaces;
use crate::docx::styles_writer::BULLET_NUM_ID;

const BULLET_ABSTRACT_NUM_ID: u32 = 0;
const BULLET_CHAR: &str = "\u{2022}";
/// Left indent and hanging indent of the bullet level, in twips
const BULLET_INDENT_LEFT: u32 = 360;
const BULLET_INDENT_HANGING: u32 = 360;

/// Writer for numbering.xml
pub struct NumberingWriter;

impl NumberingWriter {
    pub fn new() -> Self {
        Self
    }

    /// Generate numbering.xml content
    pub fn write(&self) -> String {
        let mut xml = String::new();

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(
            r#"<w:numbering xmlns:w="{}" xmlns:r="{}">"#,
            namespaces::W,
            namespaces::R,
        ));

        xml.push_str(&format!(
            r#"<w:abstractNum w:abstractNumId="{}">"#,
            BULLET_ABSTRACT_NUM_ID
        ));
        xml.push_str(r#"<w:multiLevelType w:val="singleLevel"/>"#);
        xml.push_str(r#"<w:lvl w:ilvl="0">"#);
        xml.push_str(r#"<w:start w:val="1"/>"#);
        xml.push_str(r#"<w:numFmt w:val="bullet"/>"#);
        xml.push_str(&format!(r#"<w:lvlText w:val="{}"/>"#, BULLET_CHAR));
        xml.push_str(r#"<w:lvlJc w:val="left"/>"#);
        xml.push_str(&format!(
            r#"<w:pPr><w:ind w:left="{}" w:hanging="{}"/></w:pPr>"#,
            BULLET_INDENT_LEFT, BULLET_INDENT_HANGING
        ));
        xml.push_str("</w:lvl>");
        xml.push_str("</w:abstractNum>");

        xml.push_str(&format!(
            r#"<w:num w:numId="{}"><w:abstractNumId w:val="{}"/></w:num>"#,
            BULLET_NUM_ID, BULLET_ABSTRACT_NUM_ID
        ));

        xml.push_str("</w:numbering>");
        xml
    }
}
