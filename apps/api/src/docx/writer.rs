//! DOCX Writer
//!
//! Packages the XML parts of a [`Document`] into a ZIP archive.

use std::io::{Cursor, Seek, Write};

use quick_xml::escape::escape;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::docx::content_types::{self, ContentTypes};
use crate::docx::document_writer::DocumentWriter;
use crate::docx::error::DocxResult;
use crate::docx::model::Document;
use crate::docx::numbering_writer::NumberingWriter;
use crate::docx::relationships::Relationships;
use crate::docx::styles_writer::StylesWriter;
use crate::docx::{namespaces, relationship_types, strip_invalid_xml_chars};

/// Main DOCX writer
pub struct DocxWriter<W: Write + Seek> {
    zip: ZipWriter<W>,
    content_types: ContentTypes,
    root_rels: Relationships,
    doc_rels: Relationships,
}

impl<W: Write + Seek> DocxWriter<W> {
    /// Create a new DOCX writer
    pub fn new(writer: W) -> Self {
        let mut content_types = ContentTypes::new();
        content_types.add_override("/word/document.xml", content_types::DOCUMENT_MAIN);
        content_types.add_override("/word/styles.xml", content_types::STYLES);
        content_types.add_override("/word/settings.xml", content_types::SETTINGS);
        content_types.add_override("/docProps/core.xml", content_types::CORE_PROPERTIES);

        let mut root_rels = Relationships::new();
        root_rels.add(relationship_types::DOCUMENT, "word/document.xml");
        root_rels.add(relationship_types::CORE_PROPERTIES, "docProps/core.xml");

        let mut doc_rels = Relationships::new();
        doc_rels.add(relationship_types::STYLES, "styles.xml");
        doc_rels.add(relationship_types::SETTINGS, "settings.xml");

        Self {
            zip: ZipWriter::new(writer),
            content_types,
            root_rels,
            doc_rels,
        }
    }

    /// Write a complete DOCX package and return the underlying writer
    pub fn write(mut self, doc: &Document) -> DocxResult<W> {
        let doc_xml = DocumentWriter::new().write(doc);
        self.write_file("word/document.xml", &doc_xml)?;

        let has_bullets = doc.uses_bullets();
        let styles_xml = StylesWriter::new(&doc.setup).write(has_bullets);
        self.write_file("word/styles.xml", &styles_xml)?;

        // numbering.xml only backs the ListBullet style
        if has_bullets {
            let numbering_xml = NumberingWriter::new().write();
            self.write_file("word/numbering.xml", &numbering_xml)?;
            self.content_types
                .add_override("/word/numbering.xml", content_types::NUMBERING);
            self.doc_rels.add(relationship_types::NUMBERING, "numbering.xml");
        }

        self.write_file("word/settings.xml", &generate_settings_xml())?;
        self.write_file(
            "docProps/core.xml",
            &generate_core_properties_xml(doc.title.as_deref()),
        )?;

        let root_rels_xml = self.root_rels.to_xml();
        self.write_file("_rels/.rels", &root_rels_xml)?;

        let doc_rels_xml = self.doc_rels.to_xml();
        self.write_file("word/_rels/document.xml.rels", &doc_rels_xml)?;

        // Written last so it reflects every part added above
        let content_types_xml = self.content_types.to_xml();
        self.write_file("[Content_Types].xml", &content_types_xml)?;

        Ok(self.zip.finish()?)
    }

    /// Write a file to the ZIP archive
    fn write_file(&mut self, path: &str, content: &str) -> DocxResult<()> {
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        self.zip.start_file(path, options)?;
        self.zip.write_all(content.as_bytes())?;

        Ok(())
    }
}

/// Serialize a document into an owned DOCX byte buffer.
pub fn to_bytes(doc: &Document) -> DocxResult<Vec<u8>> {
    let cursor = DocxWriter::new(Cursor::new(Vec::new())).write(doc)?;
    Ok(cursor.into_inner())
}

/// Generate a minimal settings.xml
fn generate_settings_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:settings xmlns:w="{}"><w:compat><w:compatSetting w:name="compatibilityMode" w:uri="http://schemas.microsoft.com/office/word" w:val="15"/></w:compat></w:settings>"#,
        namespaces::W
    )
}

/// Generate docProps/core.xml carrying the document title
fn generate_core_properties_xml(title: Option<&str>) -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('\n');
    xml.push_str(&format!(
        r#"<cp:coreProperties xmlns:cp="{}" xmlns:dc="{}">"#,
        namespaces::CORE_PROPERTIES,
        namespaces::DC
    ));
    if let Some(title) = title {
        let title = strip_invalid_xml_chars(title);
        xml.push_str(&format!("<dc:title>{}</dc:title>", escape(&*title)));
    }
    xml.push_str("</cp:coreProperties>");
    xml
}
