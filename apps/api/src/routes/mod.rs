pub mod health;
pub mod openapi;
pub mod privacy;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::export::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::health_handler))
        .route("/health", get(health::health_handler))
        .route("/privacy", get(privacy::privacy_handler))
        .route("/openapi.json", get(openapi::openapi_handler))
        // Export API
        .route("/export/docx", post(handlers::handle_export_docx))
        .route("/export/pdf", post(handlers::handle_export_pdf))
        .fallback(not_found)
        .with_state(state)
}
