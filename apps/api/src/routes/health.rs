use axum::Json;
use serde_json::{json, Value};

/// GET / and GET /health
/// Liveness check plus a short map of the available endpoints.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "Document Export API is running",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "POST /export/docx": "Generate DOCX document",
            "POST /export/pdf": "PDF export (not implemented, use DOCX)",
            "GET /openapi.json": "OpenAPI schema for GPT Actions",
            "GET /privacy": "Privacy policy"
        }
    }))
}
