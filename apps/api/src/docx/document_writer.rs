//! Document.xml writer
//!
//! Converts a [`Document`] into `word/document.xml`.

use crate::docx::model::{Alignment, Document, Paragraph, Run};
use crate::docx::{
    in_to_twips, namespaces, pt_to_half_points, pt_to_twips, strip_invalid_xml_chars,
};
use crate::layout::PageSetup;
use quick_xml::escape::escape;

/// Writer for document.xml
pub struct DocumentWriter;

impl DocumentWriter {
    pub fn new() -> Self {
        Self
    }

    /// Generate document.xml content
    pub fn write(&self, doc: &Document) -> String {
        let mut xml = String::new();

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(
            r#"<w:document xmlns:w="{}" xmlns:r="{}">"#,
            namespaces::W,
            namespaces::R,
        ));
        xml.push_str("<w:body>");

        for para in &doc.paragraphs {
            self.write_paragraph(&mut xml, para);
        }

        // Section properties must be the last child of the body
        self.write_section_properties(&mut xml, &doc.setup);

        xml.push_str("</w:body>");
        xml.push_str("</w:document>");
        xml
    }

    fn write_paragraph(&self, xml: &mut String, para: &Paragraph) {
        xml.push_str("<w:p>");
        self.write_paragraph_properties(xml, para);
        for run in &para.runs {
            self.write_run(xml, run);
        }
        xml.push_str("</w:p>");
    }

    fn write_paragraph_properties(&self, xml: &mut String, para: &Paragraph) {
        if !para.has_pr() {
            return;
        }

        // Child order follows CT_PPr: pStyle, spacing, jc
        xml.push_str("<w:pPr>");

        if let Some(style_id) = para.style.style_id() {
            xml.push_str(&format!(r#"<w:pStyle w:val="{}"/>"#, style_id));
        }

        if let Some(after) = para.space_after_pt {
            xml.push_str(&format!(r#"<w:spacing w:after="{}"/>"#, pt_to_twips(after)));
        }

        if para.alignment == Alignment::Center {
            xml.push_str(r#"<w:jc w:val="center"/>"#);
        }

        xml.push_str("</w:pPr>");
    }

    fn write_run(&self, xml: &mut String, run: &Run) {
        xml.push_str("<w:r>");
        self.write_run_properties(xml, run);

        let mut lines = run.text.split('\n').peekable();
        while let Some(line) = lines.next() {
            let mut segments = line.split('\t').peekable();
            while let Some(segment) = segments.next() {
                if !segment.is_empty() {
                    write_text(xml, segment);
                }
                if segments.peek().is_some() {
                    xml.push_str("<w:tab/>");
                }
            }
            if lines.peek().is_some() {
                xml.push_str("<w:br/>");
            }
        }

        xml.push_str("</w:r>");
    }

    fn write_run_properties(&self, xml: &mut String, run: &Run) {
        if run.is_unformatted() {
            return;
        }

        // Child order follows CT_RPr: rFonts, b, i, sz, szCs
        xml.push_str("<w:rPr>");

        if let Some(ref font) = run.font {
            let font = strip_invalid_xml_chars(font);
            let font = escape(&*font);
            xml.push_str(&format!(
                r#"<w:rFonts w:ascii="{}" w:hAnsi="{}" w:cs="{}"/>"#,
                font, font, font
            ));
        }

        if run.bold {
            xml.push_str("<w:b/>");
        }

        if run.italic {
            xml.push_str("<w:i/>");
        }

        if let Some(size) = run.size_pt {
            let half_pts = pt_to_half_points(size);
            xml.push_str(&format!(r#"<w:sz w:val="{}"/>"#, half_pts));
            xml.push_str(&format!(r#"<w:szCs w:val="{}"/>"#, half_pts));
        }

        xml.push_str("</w:rPr>");
    }

    fn write_section_properties(&self, xml: &mut String, setup: &PageSetup) {
        xml.push_str("<w:sectPr>");
        xml.push_str(&format!(
            r#"<w:pgSz w:w="{}" w:h="{}"/>"#,
            in_to_twips(setup.page_width_in),
            in_to_twips(setup.page_height_in),
        ));
        xml.push_str(&format!(
            r#"<w:pgMar w:top="{}" w:right="{}" w:bottom="{}" w:left="{}" w:header="720" w:footer="720" w:gutter="0"/>"#,
            in_to_twips(setup.margin_top_in),
            in_to_twips(setup.margin_right_in),
            in_to_twips(setup.margin_bottom_in),
            in_to_twips(setup.margin_left_in),
        ));
        xml.push_str("</w:sectPr>");
    }
}

/// Write a `w:t` element, preserving leading/trailing spaces.
/// Characters XML 1.0 forbids are dropped; nothing is written if none remain.
fn write_text(xml: &mut String, text: &str) {
    let text = strip_invalid_xml_chars(text);
    if text.is_empty() {
        return;
    }
    if text.starts_with(' ') || text.ends_with(' ') {
        xml.push_str(r#"<w:t xml:space="preserve">"#);
    } else {
        xml.push_str("<w:t>");
    }
    xml.push_str(&escape(&*text));
    xml.push_str("</w:t>");
}
