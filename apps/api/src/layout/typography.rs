//! Type scale for the exported documents, in points.

/// Name line at the top of a resume.
pub const RESUME_TITLE_PT: f32 = 18.0;
/// Cover letters use a smaller name heading.
pub const COVER_LETTER_TITLE_PT: f32 = 14.0;
/// Contact-info line under the title.
pub const SUBTITLE_PT: f32 = 10.0;
/// Upper-cased section headings (`Section.heading` and `## ` lines).
pub const SECTION_HEADING_PT: f32 = 12.0;
/// Case-preserving `# ` headings in raw content.
pub const DOCUMENT_HEADING_PT: f32 = 14.0;
/// Spacing after section headings and structured body paragraphs.
pub const PARAGRAPH_SPACING_AFTER_PT: f32 = 3.0;
