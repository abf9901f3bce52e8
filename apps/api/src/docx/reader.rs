//! Test-side DOCX reader.
//!
//! Opens a package produced by [`crate::docx::to_bytes`] and parses
//! `word/document.xml` back into paragraphs so tests can assert on content and
//! formatting without trusting the writer's own model.

use std::collections::HashMap;
use std::io::{Cursor, Read};

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use zip::ZipArchive;

use crate::docx::error::{DocxError, DocxResult};

/// A run as found in document.xml
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedRun {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub size_half_points: Option<u32>,
    pub font: Option<String>,
}

/// A paragraph as found in document.xml
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedParagraph {
    pub style: Option<String>,
    pub justification: Option<String>,
    pub space_after_twips: Option<u32>,
    pub runs: Vec<ParsedRun>,
}

impl ParsedParagraph {
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    pub fn is_centered(&self) -> bool {
        self.justification.as_deref() == Some("center")
    }

    pub fn is_bullet(&self) -> bool {
        self.style.as_deref() == Some("ListBullet")
    }
}

/// All XML parts of a package, keyed by path
pub struct DocxPackage {
    parts: HashMap<String, String>,
}

impl DocxPackage {
    pub fn open(bytes: &[u8]) -> DocxResult<Self> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))?;
        let mut parts = HashMap::new();

        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;
            let mut content = String::new();
            file.read_to_string(&mut content)?;
            parts.insert(file.name().to_string(), content);
        }

        Ok(Self { parts })
    }

    pub fn has_part(&self, path: &str) -> bool {
        self.parts.contains_key(path)
    }

    pub fn part(&self, path: &str) -> Option<&str> {
        self.parts.get(path).map(String::as_str)
    }

    /// Panics unless every part is well-formed XML 1.0: each character
    /// matches the `Char` production and the element structure parses to
    /// the end with matching end tags.
    pub fn assert_well_formed(&self) {
        for (path, xml) in &self.parts {
            if let Some((offset, c)) = xml.char_indices().find(|&(_, c)| !allowed_in_xml(c)) {
                panic!("{path}: character U+{:04X} at byte {offset} is not allowed in XML", c as u32);
            }

            let mut reader = Reader::from_str(xml);
            let mut depth = 0usize;
            loop {
                match reader.read_event() {
                    Ok(Event::Start(_)) => depth += 1,
                    Ok(Event::End(_)) => depth -= 1,
                    Ok(Event::Eof) => break,
                    Ok(_) => {}
                    Err(e) => panic!("{path}: {e}"),
                }
            }
            assert_eq!(depth, 0, "{path}: unclosed elements");
        }
    }

    /// Parse the body paragraphs of word/document.xml
    pub fn paragraphs(&self) -> DocxResult<Vec<ParsedParagraph>> {
        let xml = self
            .part("word/document.xml")
            .ok_or(DocxError::Zip(zip::result::ZipError::FileNotFound))?;
        parse_paragraphs(xml)
    }
}

/// XML 1.0 `Char`: #x9 | #xA | #xD | [#x20-#xD7FF] | [#xE000-#xFFFD] | [#x10000-#x10FFFF]
fn allowed_in_xml(c: char) -> bool {
    let cp = c as u32;
    cp == 0x9
        || cp == 0xA
        || cp == 0xD
        || (0x20..=0xD7FF).contains(&cp)
        || (0xE000..=0xFFFD).contains(&cp)
        || (0x10000..=0x10FFFF).contains(&cp)
}

fn attr(e: &BytesStart<'_>, name: &str) -> DocxResult<Option<String>> {
    match e.try_get_attribute(name)? {
        Some(a) => Ok(Some(a.unescape_value()?.into_owned())),
        None => Ok(None),
    }
}

fn parse_paragraphs(xml: &str) -> DocxResult<Vec<ParsedParagraph>> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut para: Option<ParsedParagraph> = None;
    let mut run: Option<ParsedRun> = None;
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:p" => para = Some(ParsedParagraph::default()),
                b"w:r" => run = Some(ParsedRun::default()),
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:p" => paragraphs.push(ParsedParagraph::default()),
                b"w:b" => {
                    if let Some(r) = run.as_mut() {
                        r.bold = true;
                    }
                }
                b"w:i" => {
                    if let Some(r) = run.as_mut() {
                        r.italic = true;
                    }
                }
                b"w:sz" => {
                    if let Some(r) = run.as_mut() {
                        r.size_half_points = attr(&e, "w:val")?.and_then(|v| v.parse().ok());
                    }
                }
                b"w:rFonts" => {
                    if let Some(r) = run.as_mut() {
                        r.font = attr(&e, "w:ascii")?;
                    }
                }
                b"w:pStyle" => {
                    if let Some(p) = para.as_mut() {
                        p.style = attr(&e, "w:val")?;
                    }
                }
                b"w:jc" => {
                    if let Some(p) = para.as_mut() {
                        p.justification = attr(&e, "w:val")?;
                    }
                }
                b"w:spacing" => {
                    if let Some(p) = para.as_mut() {
                        p.space_after_twips = attr(&e, "w:after")?.and_then(|v| v.parse().ok());
                    }
                }
                _ => {}
            },
            Event::Text(t) if in_text => {
                if let Some(r) = run.as_mut() {
                    r.text.push_str(&t.unescape()?);
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:r" => {
                    if let (Some(r), Some(p)) = (run.take(), para.as_mut()) {
                        p.runs.push(r);
                    }
                }
                b"w:p" => {
                    if let Some(p) = para.take() {
                        paragraphs.push(p);
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_paragraph_with_runs() {
        let xml = r#"<w:document><w:body><w:p><w:pPr><w:pStyle w:val="ListBullet"/><w:spacing w:after="60"/></w:pPr><w:r><w:rPr><w:b/><w:sz w:val="24"/></w:rPr><w:t>Bold</w:t></w:r><w:r><w:t xml:space="preserve"> &amp; plain</w:t></w:r></w:p><w:p></w:p></w:body></w:document>"#;

        let paragraphs = parse_paragraphs(xml).unwrap();
        assert_eq!(paragraphs.len(), 2);

        let first = &paragraphs[0];
        assert!(first.is_bullet());
        assert_eq!(first.space_after_twips, Some(60));
        assert_eq!(first.runs.len(), 2);
        assert!(first.runs[0].bold);
        assert_eq!(first.runs[0].size_half_points, Some(24));
        assert_eq!(first.text(), "Bold & plain");

        assert!(paragraphs[1].runs.is_empty());
    }

    #[test]
    #[should_panic(expected = "U+0001")]
    fn test_well_formed_check_rejects_control_characters() {
        let mut parts = HashMap::new();
        parts.insert(
            "word/document.xml".to_string(),
            "<w:document><w:t>Jane\u{1}</w:t></w:document>".to_string(),
        );
        DocxPackage { parts }.assert_well_formed();
    }

    #[test]
    #[should_panic]
    fn test_well_formed_check_rejects_mismatched_tags() {
        let mut parts = HashMap::new();
        parts.insert("word/document.xml".to_string(), "<a><b></a>".to_string());
        DocxPackage { parts }.assert_well_formed();
    }
}
