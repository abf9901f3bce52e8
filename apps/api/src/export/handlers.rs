//! Axum route handlers for the Export API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};
use bytes::Bytes;
use tokio::task::JoinError;
use tracing::info;

use crate::docx::{DocxError, DOCX_MIME_TYPE};
use crate::errors::AppError;
use crate::export::builder::render_docx;
use crate::export::validation::{validate_export_request, ValidatedExport};
use crate::models::export::{ExportRequest, ExportResponse, PdfExportStatus, ReturnFormat};
use crate::state::AppState;

pub const EXPORT_SUCCESS_MESSAGE: &str =
    "Document generated successfully. Use the base64 content to provide a download link.";

/// POST /export/docx
///
/// Generates an ATS-friendly DOCX from `sections` (preferred) or raw
/// `content`. Returns base64 JSON by default, or the raw file when
/// `return_format` is `binary`.
pub async fn handle_export_docx(
    State(state): State<AppState>,
    payload: Result<Json<ExportRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload?;

    let ValidatedExport {
        document,
        file_name,
        return_format,
    } = validate_export_request(request)?;

    info!(
        doc_type = document.doc_type.as_str(),
        body = document.body.kind(),
        format = ?return_format,
        "Generating document"
    );

    let setup = state.page_setup.clone();
    let bytes = tokio::task::spawn_blocking(move || render_docx(&document, &setup))
        .await
        .map_err(build_task_failed)??;

    info!(file_name = %file_name, size = bytes.len(), "Document generated");

    match return_format {
        ReturnFormat::Binary => Ok((
            [
                (header::CONTENT_TYPE, DOCX_MIME_TYPE.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{file_name}\""),
                ),
            ],
            Bytes::from(bytes),
        )
            .into_response()),
        ReturnFormat::Base64 => Ok(Json(ExportResponse {
            file_name,
            file_base64: BASE64_STANDARD.encode(&bytes),
            mime_type: DOCX_MIME_TYPE.to_string(),
            message: EXPORT_SUCCESS_MESSAGE.to_string(),
        })
        .into_response()),
    }
}

/// A panicked or cancelled build task is a failed build; its cause is kept.
fn build_task_failed(err: JoinError) -> AppError {
    AppError::DocumentGeneration(DocxError::Interrupted(err.to_string()))
}

/// POST /export/pdf
///
/// PDF rendering needs an office suite on the server, which this service does
/// not ship. Always answers with a `not_implemented` status; the body is
/// ignored.
pub async fn handle_export_pdf() -> Json<PdfExportStatus> {
    Json(PdfExportStatus {
        status: "not_implemented".to_string(),
        message: "PDF export requires LibreOffice on the server. For free hosting, recommend \
                  using DOCX which users can export to PDF from Word/Google Docs."
            .to_string(),
        workaround: "Use /export/docx and convert to PDF locally or via Google Docs".to_string(),
    })
}
