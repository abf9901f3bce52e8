//! Error types for DOCX packaging

use thiserror::Error;

/// Errors that can occur while writing (or, in tests, reading) a DOCX package
#[derive(Debug, Error)]
pub enum DocxError {
    /// IO error while writing into the archive
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// XML error
    #[error("XML error: {0}")]
    Xml(String),

    /// The build task stopped before producing a package
    #[error("document build did not complete: {0}")]
    Interrupted(String),
}

impl From<quick_xml::Error> for DocxError {
    fn from(err: quick_xml::Error) -> Self {
        DocxError::Xml(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for DocxError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        DocxError::Xml(format!("Attribute error: {}", err))
    }
}

/// Result type for DOCX operations
pub type DocxResult<T> = std::result::Result<T, DocxError>;
