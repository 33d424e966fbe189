//! # REST API for Export, Import and Data Reset

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use tracing::info;

use super::error_response;
use crate::backend::AppState;

/// Download the whole store as one JSON document
pub async fn export_data(State(state): State<AppState>) -> Response {
    info!("GET /api/export");

    match state.export_service.export_data() {
        Ok(payload) => {
            let disposition = format!(
                "attachment; filename=\"{}\"",
                state.export_service.export_filename()
            );
            (
                [(header::CONTENT_DISPOSITION, disposition)],
                Json(payload),
            )
                .into_response()
        }
        Err(e) => error_response("export data", e),
    }
}

/// Replace collections from an export document. The raw body is parsed by
/// the domain layer so an unparseable document is rejected without mutating
/// anything.
pub async fn import_data(State(state): State<AppState>, body: String) -> Response {
    info!("POST /api/import ({} bytes)", body.len());

    match state.export_service.import_data(&body) {
        Ok(summary) => Json(summary).into_response(),
        Err(e) => error_response("import data", e),
    }
}

/// Wipe every collection and reset the settings
pub async fn clear_all_data(State(state): State<AppState>) -> Response {
    info!("DELETE /api/data");

    match state.export_service.clear_all_data() {
        Ok(()) => (StatusCode::OK, Json(json!({ "cleared": true }))).into_response(),
        Err(e) => error_response("clear data", e),
    }
}
