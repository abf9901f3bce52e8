//! OpenAPI description of the export API, consumed by GPT Actions.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::docx::DOCX_MIME_TYPE;
use crate::state::AppState;

/// GET /openapi.json
pub async fn openapi_handler(State(state): State<AppState>) -> Json<Value> {
    Json(openapi_document(&state.config.server_url()))
}

pub fn openapi_document(server_url: &str) -> Value {
    json!({
        "openapi": "3.1.0",
        "info": {
            "title": "Document Export API",
            "description": "Generate ATS-friendly DOCX documents from text/markdown content. Designed for GPT Actions.",
            "version": env!("CARGO_PKG_VERSION")
        },
        "servers": [{ "url": server_url }],
        "paths": {
            "/export/docx": {
                "post": {
                    "operationId": "exportDocx",
                    "summary": "Generate an ATS-friendly DOCX document",
                    "description": "Provide either `sections` (recommended) or raw `content`. \
                        Markdown support: `**bold**`, `*italic*`, `- item` bullets, and `## Heading` / `# Heading` in `content`.",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/ExportRequest" }
                            }
                        }
                    },
                    "responses": {
                        "200": {
                            "description": "Document generated",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/ExportResponse" }
                                },
                                DOCX_MIME_TYPE: {
                                    "schema": { "type": "string", "format": "binary" }
                                }
                            }
                        },
                        "400": { "description": "Neither sections nor content provided" },
                        "422": { "description": "Request body does not match the schema" },
                        "500": { "description": "Document generation failed" }
                    }
                }
            },
            "/export/pdf": {
                "post": {
                    "operationId": "exportPdf",
                    "summary": "PDF export (not implemented)",
                    "responses": {
                        "200": {
                            "description": "Always reports that PDF export is unavailable",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/PdfExportStatus" }
                                }
                            }
                        }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Section": {
                    "type": "object",
                    "required": ["content"],
                    "properties": {
                        "heading": {
                            "type": ["string", "null"],
                            "description": "Section heading (e.g., 'Experience', 'Education')"
                        },
                        "content": {
                            "type": "string",
                            "description": "Section content as plain text or markdown"
                        }
                    }
                },
                "ExportRequest": {
                    "type": "object",
                    "properties": {
                        "doc_type": {
                            "type": "string",
                            "enum": ["resume", "cover_letter"],
                            "default": "resume"
                        },
                        "file_name": {
                            "type": ["string", "null"],
                            "description": "Output filename without extension. Defaults to the doc type."
                        },
                        "title": {
                            "type": ["string", "null"],
                            "description": "Document title / applicant name (displayed at top)"
                        },
                        "subtitle": {
                            "type": ["string", "null"],
                            "description": "Subtitle (e.g., contact info, job title)"
                        },
                        "sections": {
                            "type": ["array", "null"],
                            "items": { "$ref": "#/components/schemas/Section" },
                            "description": "Structured sections. If provided, 'content' is ignored."
                        },
                        "content": {
                            "type": ["string", "null"],
                            "description": "Full document content as plain text or markdown. Used if 'sections' is not provided."
                        },
                        "return_format": {
                            "type": "string",
                            "enum": ["base64", "binary"],
                            "default": "base64"
                        }
                    }
                },
                "ExportResponse": {
                    "type": "object",
                    "required": ["file_name", "file_base64", "mime_type", "message"],
                    "properties": {
                        "file_name": { "type": "string" },
                        "file_base64": { "type": "string" },
                        "mime_type": { "type": "string" },
                        "message": { "type": "string" }
                    }
                },
                "PdfExportStatus": {
                    "type": "object",
                    "properties": {
                        "status": { "type": "string" },
                        "message": { "type": "string" },
                        "workaround": { "type": "string" }
                    }
                }
            }
        }
    })
}
