//! In-memory document model
//!
//! A [`Document`] is a flat list of paragraphs, each an ordered list of styled
//! runs. It lives for one request: built, serialized, dropped.

use crate::layout::PageSetup;

/// Horizontal paragraph alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
}

/// Paragraph style reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParagraphStyle {
    /// Document default
    #[default]
    Normal,
    /// Single-level bulleted list item
    ListBullet,
}

impl ParagraphStyle {
    /// Style ID as written in `w:pStyle`, `None` for the default style
    pub fn style_id(self) -> Option<&'static str> {
        match self {
            ParagraphStyle::Normal => None,
            ParagraphStyle::ListBullet => Some("ListBullet"),
        }
    }
}

/// A contiguous span of text sharing one set of character properties
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    /// Font size in points; the document default applies when unset
    pub size_pt: Option<f32>,
    /// Font family name; the document default applies when unset
    pub font: Option<String>,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            ..Self::default()
        }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            italic: true,
            ..Self::default()
        }
    }

    pub fn with_size(mut self, size_pt: f32) -> Self {
        self.size_pt = Some(size_pt);
        self
    }

    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    /// True when the run carries no direct formatting
    pub fn is_unformatted(&self) -> bool {
        !self.bold && !self.italic && self.size_pt.is_none() && self.font.is_none()
    }
}

/// A block of runs with paragraph-level formatting
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paragraph {
    pub style: ParagraphStyle,
    pub alignment: Alignment,
    /// Spacing after the paragraph in points
    pub space_after_pt: Option<f32>,
    pub runs: Vec<Run>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paragraph in the bulleted list style
    pub fn bullet() -> Self {
        Self {
            style: ParagraphStyle::ListBullet,
            ..Self::default()
        }
    }

    pub fn centered(mut self) -> Self {
        self.alignment = Alignment::Center;
        self
    }

    pub fn with_space_after(mut self, pt: f32) -> Self {
        self.space_after_pt = Some(pt);
        self
    }

    pub fn with_run(mut self, run: Run) -> Self {
        self.runs.push(run);
        self
    }

    pub fn with_runs(mut self, runs: impl IntoIterator<Item = Run>) -> Self {
        self.runs.extend(runs);
        self
    }

    /// Concatenated text of all runs
    #[cfg(test)]
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    pub fn has_pr(&self) -> bool {
        self.style.style_id().is_some()
            || self.alignment != Alignment::Left
            || self.space_after_pt.is_some()
    }
}

/// A complete document ready for packaging
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub setup: PageSetup,
    /// Written to `dc:title` in the core properties
    pub title: Option<String>,
    pub paragraphs: Vec<Paragraph>,
}

impl Document {
    pub fn new(setup: PageSetup) -> Self {
        Self {
            setup,
            title: None,
            paragraphs: Vec::new(),
        }
    }

    pub fn push(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    pub fn uses_bullets(&self) -> bool {
        self.paragraphs
            .iter()
            .any(|p| p.style == ParagraphStyle::ListBullet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{default_page_setup, FontFamily};

    #[test]
    fn test_run_constructors() {
        let run = Run::bold("Name").with_size(18.0).with_font("Calibri");
        assert!(run.bold);
        assert!(!run.italic);
        assert_eq!(run.size_pt, Some(18.0));
        assert_eq!(run.font.as_deref(), Some("Calibri"));
        assert!(Run::plain("x").is_unformatted());
        assert!(!Run::italic("x").is_unformatted());
    }

    #[test]
    fn test_paragraph_text_concatenates_runs() {
        let para = Paragraph::new()
            .with_run(Run::bold("A"))
            .with_run(Run::plain(" and "))
            .with_run(Run::italic("B"));
        assert_eq!(para.text(), "A and B");
        assert!(!para.has_pr());
        assert!(para.clone().centered().has_pr());
    }

    #[test]
    fn test_uses_bullets() {
        let mut doc = Document::new(default_page_setup(FontFamily::Calibri));
        doc.push(Paragraph::new().with_run(Run::plain("intro")));
        assert!(!doc.uses_bullets());
        doc.push(Paragraph::bullet().with_run(Run::plain("item")));
        assert!(doc.uses_bullets());
    }
}
