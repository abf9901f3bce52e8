//! Styles.xml writer
//!
//! Document defaults come from the [`PageSetup`]; the only named styles are
//! `Normal` and, when the document has bullets, `ListBullet`.

use crate::docx::{namespaces, pt_to_half_points};
use crate::layout::PageSetup;
use quick_xml::escape::escape;

/// Numbering instance that `ListBullet` points at (see numbering_writer)
pub const BULLET_NUM_ID: u32 = 1;

/// Writer for styles.xml
pub struct StylesWriter<'a> {
    setup: &'a PageSetup,
}

impl<'a> StylesWriter<'a> {
    pub fn new(setup: &'a PageSetup) -> Self {
        Self { setup }
    }

    /// Generate styles.xml content
    pub fn write(&self, include_list_bullet: bool) -> String {
        let mut xml = String::new();

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(
            r#"<w:styles xmlns:w="{}" xmlns:r="{}">"#,
            namespaces::W,
            namespaces::R,
        ));

        self.write_doc_defaults(&mut xml);
        self.write_normal_style(&mut xml);
        if include_list_bullet {
            self.write_list_bullet_style(&mut xml);
        }

        xml.push_str("</w:styles>");
        xml
    }

    fn write_doc_defaults(&self, xml: &mut String) {
        let font = escape(self.setup.font.name());
        let half_pts = pt_to_half_points(self.setup.font_size_pt);

        xml.push_str("<w:docDefaults>");

        xml.push_str("<w:rPrDefault><w:rPr>");
        xml.push_str(&format!(
            r#"<w:rFonts w:ascii="{}" w:eastAsia="{}" w:hAnsi="{}" w:cs="{}"/>"#,
            font, font, font, font
        ));
        xml.push_str(&format!(r#"<w:sz w:val="{}"/>"#, half_pts));
        xml.push_str(&format!(r#"<w:szCs w:val="{}"/>"#, half_pts));
        xml.push_str(r#"<w:lang w:val="en-US"/>"#);
        xml.push_str("</w:rPr></w:rPrDefault>");

        xml.push_str("<w:pPrDefault><w:pPr>");
        xml.push_str(r#"<w:spacing w:after="0" w:line="240" w:lineRule="auto"/>"#);
        xml.push_str("</w:pPr></w:pPrDefault>");

        xml.push_str("</w:docDefaults>");
    }

    fn write_normal_style(&self, xml: &mut String) {
        xml.push_str(r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal">"#);
        xml.push_str(r#"<w:name w:val="Normal"/>"#);
        xml.push_str(r#"<w:qFormat/>"#);
        xml.push_str("</w:style>");
    }

    fn write_list_bullet_style(&self, xml: &mut String) {
        xml.push_str(r#"<w:style w:type="paragraph" w:styleId="ListBullet">"#);
        xml.push_str(r#"<w:name w:val="List Bullet"/>"#);
        xml.push_str(r#"<w:basedOn w:val="Normal"/>"#);
        xml.push_str(r#"<w:uiPriority w:val="99"/>"#);
        xml.push_str("<w:pPr>");
        xml.push_str(&format!(
            r#"<w:numPr><w:ilvl w:val="0"/><w:numId w:val="{}"/></w:numPr>"#,
            BULLET_NUM_ID
        ));
        xml.push_str(r#"<w:contextualSpacing/>"#);
        xml.push_str("</w:pPr>");
        xml.push_str("</w:style>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{default_page_setup, FontFamily};

    #[test]
    fn test_doc_defaults_follow_page_setup() {
        let setup = default_page_setup(FontFamily::Georgia);
        let xml = StylesWriter::new(&setup).write(false);

        assert!(xml.contains(r#"w:ascii="Georgia""#));
        assert!(xml.contains(r#"<w:sz w:val="22"/>"#));
        assert!(xml.contains(r#"w:styleId="Normal""#));
        assert!(!xml.contains("ListBullet"));
    }

    #[test]
    fn test_list_bullet_style_links_numbering() {
        let setup = default_page_setup(FontFamily::Calibri);
        let xml = StylesWriter::new(&setup).write(true);

        assert!(xml.contains(r#"w:styleId="ListBullet""#));
        assert!(xml.contains(r#"<w:numId w:val="1"/>"#));
    }

    #[test]
    fn test_font_name_with_spaces() {
        let setup = default_page_setup(FontFamily::TimesNewRoman);
        let xml = StylesWriter::new(&setup).write(false);
        assert!(xml.contains(r#"w:ascii="Times New Roman""#));
    }
}
