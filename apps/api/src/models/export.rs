//! Wire types for the export endpoints.

use serde::{Deserialize, Serialize};

use crate::layout::typography::{COVER_LETTER_TITLE_PT, RESUME_TITLE_PT};

/// Kind of document being exported. Drives the title size and default filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocType {
    #[default]
    Resume,
    CoverLetter,
}

impl DocType {
    /// Wire name, also the default filename stem.
    pub fn as_str(self) -> &'static str {
        match self {
            DocType::Resume => "resume",
            DocType::CoverLetter => "cover_letter",
        }
    }

    /// Cover letters conventionally use a smaller name heading.
    pub fn title_size_pt(self) -> f32 {
        match self {
            DocType::Resume => RESUME_TITLE_PT,
            DocType::CoverLetter => COVER_LETTER_TITLE_PT,
        }
    }
}

/// How the generated file is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnFormat {
    /// JSON body carrying the file as base64.
    #[default]
    Base64,
    /// Raw bytes with a `Content-Disposition: attachment` header.
    Binary,
}

/// One logical block of a document, e.g. "Experience".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub heading: Option<String>,
    /// Plain text or inline markdown, one paragraph or bullet per line.
    pub content: String,
}

/// POST /export/docx request body.
///
/// `sections` takes precedence over `content`; at least one of them must be
/// non-empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportRequest {
    #[serde(default)]
    pub doc_type: DocType,
    /// Filename without extension. Defaults to the doc type.
    #[serde(default)]
    pub file_name: Option<String>,
    /// Applicant name, displayed at the top.
    #[serde(default)]
    pub title: Option<String>,
    /// Contact info or job title line under the title.
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub sections: Option<Vec<Section>>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub return_format: ReturnFormat,
}

/// POST /export/docx response body for `return_format = "base64"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportResponse {
    /// Generated filename with extension.
    pub file_name: String,
    pub file_base64: String,
    pub mime_type: String,
    pub message: String,
}

/// POST /export/pdf response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfExportStatus {
    pub status: String,
    pub message: String,
    pub workaround: String,
}
