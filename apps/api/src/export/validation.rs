//! Boundary validation for export requests.
//!
//! Turns the loosely-shaped [`ExportRequest`] into an [`ExportDocument`] whose
//! body is known to be present, so the builder never sees an invalid request.

use crate::errors::AppError;
use crate::export::filename::{export_file_name, DOCX_EXTENSION};
use crate::models::export::{DocType, ExportRequest, ReturnFormat, Section};

pub const MISSING_CONTENT_MESSAGE: &str = "Either 'sections' or 'content' must be provided";

/// The content source of a document, exactly one of the two request fields.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentBody {
    /// Structured sections with optional headings.
    Sections(Vec<Section>),
    /// Raw markdown-ish text.
    Content(String),
}

impl DocumentBody {
    pub fn kind(&self) -> &'static str {
        match self {
            DocumentBody::Sections(_) => "sections",
            DocumentBody::Content(_) => "content",
        }
    }
}

/// Everything the builder needs, with empty strings normalized to `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportDocument {
    pub doc_type: DocType,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub body: DocumentBody,
}

/// A validated DOCX export.
#[derive(Debug, Clone)]
pub struct ValidatedExport {
    pub document: ExportDocument,
    /// Sanitized filename including the `.docx` extension.
    pub file_name: String,
    pub return_format: ReturnFormat,
}

/// Validates an export request.
///
/// FAIL conditions:
/// - `sections` absent or empty AND `content` absent or empty
///
/// Everything else is accepted; malformed markdown renders best-effort.
pub fn validate_export_request(request: ExportRequest) -> Result<ValidatedExport, AppError> {
    let ExportRequest {
        doc_type,
        file_name,
        title,
        subtitle,
        sections,
        content,
        return_format,
    } = request;

    let body = match (sections, content) {
        (Some(sections), _) if !sections.is_empty() => DocumentBody::Sections(sections),
        (_, Some(content)) if !content.is_empty() => DocumentBody::Content(content),
        _ => return Err(AppError::Validation(MISSING_CONTENT_MESSAGE.to_string())),
    };

    Ok(ValidatedExport {
        file_name: export_file_name(file_name.as_deref(), doc_type, DOCX_EXTENSION),
        document: ExportDocument {
            doc_type,
            title: title.filter(|t| !t.is_empty()),
            subtitle: subtitle.filter(|s| !s.is_empty()),
            body,
        },
        return_format,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(heading: Option<&str>, content: &str) -> Section {
        Section {
            heading: heading.map(str::to_string),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_rejects_missing_body() {
        let err = validate_export_request(ExportRequest::default()).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg == MISSING_CONTENT_MESSAGE));
    }

    #[test]
    fn test_rejects_empty_sections_and_content() {
        let request = ExportRequest {
            sections: Some(vec![]),
            content: Some(String::new()),
            ..ExportRequest::default()
        };
        assert!(validate_export_request(request).is_err());
    }

    #[test]
    fn test_sections_take_precedence() {
        let request = ExportRequest {
            sections: Some(vec![section(Some("Skills"), "- Go")]),
            content: Some("ignored".to_string()),
            ..ExportRequest::default()
        };
        let export = validate_export_request(request).unwrap();
        assert_eq!(export.document.body.kind(), "sections");
    }

    #[test]
    fn test_empty_sections_fall_back_to_content() {
        let request = ExportRequest {
            sections: Some(vec![]),
            content: Some("## Summary".to_string()),
            ..ExportRequest::default()
        };
        let export = validate_export_request(request).unwrap();
        assert_eq!(
            export.document.body,
            DocumentBody::Content("## Summary".to_string())
        );
    }

    #[test]
    fn test_empty_title_and_subtitle_dropped() {
        let request = ExportRequest {
            title: Some(String::new()),
            subtitle: Some("jane@x.com".to_string()),
            content: Some("hello".to_string()),
            ..ExportRequest::default()
        };
        let export = validate_export_request(request).unwrap();
        assert!(export.document.title.is_none());
        assert_eq!(export.document.subtitle.as_deref(), Some("jane@x.com"));
    }

    #[test]
    fn test_file_name_derived_and_sanitized() {
        let request = ExportRequest {
            doc_type: DocType::CoverLetter,
            content: Some("Dear team".to_string()),
            ..ExportRequest::default()
        };
        assert_eq!(
            validate_export_request(request).unwrap().file_name,
            "cover_letter.docx"
        );

        let request = ExportRequest {
            file_name: Some("Jane Smith".to_string()),
            content: Some("x".to_string()),
            return_format: ReturnFormat::Binary,
            ..ExportRequest::default()
        };
        let export = validate_export_request(request).unwrap();
        assert_eq!(export.file_name, "Jane_Smith.docx");
        assert_eq!(export.return_format, ReturnFormat::Binary);
    }
}
