//! Document builder: lays out a validated export as an ATS-friendly document.
//!
//! # Layout rules
//! - Title: centered, bold, 18pt for resumes and 14pt for cover letters
//! - Subtitle: centered, 10pt
//! - Structured sections: upper-cased bold 12pt heading, then one paragraph
//!   or bullet per non-empty line, 3pt spacing after each
//! - Raw content: `## ` upper-cased 12pt heading, `# ` 14pt heading,
//!   `- `/`• ` bullets, blank lines kept as empty paragraphs
//!
//! Body text goes through the inline markdown renderer; headings do not.

use tracing::debug;

use crate::docx::{self, Document, DocxResult, Paragraph, Run};
use crate::export::markdown::render_inline;
use crate::export::validation::{DocumentBody, ExportDocument};
use crate::layout::typography::{
    DOCUMENT_HEADING_PT, PARAGRAPH_SPACING_AFTER_PT, SECTION_HEADING_PT, SUBTITLE_PT,
};
use crate::layout::PageSetup;
use crate::models::export::Section;

const BULLET_MARKERS: [&str; 2] = ["- ", "• "];

/// Builds the document and serializes it to DOCX bytes.
///
/// CPU-bound: callers on the async runtime should run this inside
/// `tokio::task::spawn_blocking`.
pub fn render_docx(export: &ExportDocument, setup: &PageSetup) -> DocxResult<Vec<u8>> {
    let document = build_document(export, setup);
    debug!(
        paragraphs = document.paragraphs.len(),
        bullets = document.uses_bullets(),
        "Document laid out"
    );
    docx::to_bytes(&document)
}

/// Lays out a validated export. Order of the emitted paragraphs is the
/// visual order of the document.
pub fn build_document(export: &ExportDocument, setup: &PageSetup) -> Document {
    let font = setup.font.name();
    let mut doc = Document::new(setup.clone());
    doc.title = export.title.clone();

    if let Some(title) = &export.title {
        doc.push(
            Paragraph::new().centered().with_run(
                Run::bold(title.as_str())
                    .with_size(export.doc_type.title_size_pt())
                    .with_font(font),
            ),
        );
    }

    if let Some(subtitle) = &export.subtitle {
        doc.push(
            Paragraph::new()
                .centered()
                .with_run(Run::plain(subtitle.as_str()).with_size(SUBTITLE_PT).with_font(font)),
        );
    }

    match &export.body {
        DocumentBody::Sections(sections) => {
            for section in sections {
                push_section(&mut doc, section, font);
            }
        }
        DocumentBody::Content(content) => push_raw_content(&mut doc, content),
    }

    doc
}

/// Strips a leading `- ` or `• ` marker.
fn strip_bullet(line: &str) -> Option<&str> {
    BULLET_MARKERS
        .iter()
        .find_map(|marker| line.strip_prefix(*marker))
}

/// Bullet or plain paragraph with inline markdown rendered.
fn body_paragraph(line: &str) -> Paragraph {
    match strip_bullet(line) {
        Some(item) => Paragraph::bullet().with_runs(render_inline(item)),
        None => Paragraph::new().with_runs(render_inline(line)),
    }
}

fn push_section(doc: &mut Document, section: &Section, font: &str) {
    if let Some(heading) = section.heading.as_deref().filter(|h| !h.is_empty()) {
        doc.push(
            Paragraph::new()
                .with_space_after(PARAGRAPH_SPACING_AFTER_PT)
                .with_run(
                    Run::bold(heading.to_uppercase())
                        .with_size(SECTION_HEADING_PT)
                        .with_font(font),
                ),
        );
    }

    for line in section.content.trim().split('\n') {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        doc.push(body_paragraph(line).with_space_after(PARAGRAPH_SPACING_AFTER_PT));
    }
}

fn push_raw_content(doc: &mut Document, content: &str) {
    for line in content.trim().split('\n') {
        let line = line.trim();

        // Blank lines keep the author's vertical spacing
        if line.is_empty() {
            doc.push(Paragraph::new());
            continue;
        }

        let paragraph = if let Some(heading) = line.strip_prefix("## ") {
            Paragraph::new()
                .with_run(Run::bold(heading.to_uppercase()).with_size(SECTION_HEADING_PT))
        } else if let Some(heading) = line.strip_prefix("# ") {
            Paragraph::new().with_run(Run::bold(heading).with_size(DOCUMENT_HEADING_PT))
        } else {
            body_paragraph(line)
        };
        doc.push(paragraph);
    }
}
