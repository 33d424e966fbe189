//! # REST API for Locations

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use tracing::info;

use super::error_response;
use crate::backend::domain::models::location::Location;
use crate::backend::AppState;
use shared::{CreateLocationRequest, RenameLocationRequest};

/// List all locations sorted by name
pub async fn list_locations(State(state): State<AppState>) -> Response {
    info!("GET /api/locations");

    match state.location_service.list_locations() {
        Ok(locations) => {
            let dtos: Vec<shared::Location> = locations.iter().map(Location::to_dto).collect();
            Json(dtos).into_response()
        }
        Err(e) => error_response("list locations", e),
    }
}

/// Add a location; duplicate names are rejected
pub async fn create_location(
    State(state): State<AppState>,
    Json(request): Json<CreateLocationRequest>,
) -> Response {
    info!("POST /api/locations - {}", request.name);

    match state.location_service.create_location(&request.name) {
        Ok(location) => (StatusCode::CREATED, Json(location.to_dto())).into_response(),
        Err(e) => error_response("create location", e),
    }
}

/// Rename a location, moving every family that references it; unknown
/// identifiers yield a `null` body
pub async fn rename_location(
    State(state): State<AppState>,
    Path(location_id): Path<String>,
    Json(request): Json<RenameLocationRequest>,
) -> Response {
    info!("PUT /api/locations/{} - {}", location_id, request.name);

    match state.location_service.rename_location(&location_id, &request.name) {
        Ok(location) => Json(location.map(|l| l.to_dto())).into_response(),
        Err(e) => error_response("rename location", e),
    }
}

/// Delete a location; referencing families are left untouched
pub async fn delete_location(
    State(state): State<AppState>,
    Path(location_id): Path<String>,
) -> Response {
    info!("DELETE /api/locations/{}", location_id);

    match state.location_service.delete_location(&location_id) {
        Ok(deleted) => Json(json!({ "deleted": deleted })).into_response(),
        Err(e) => error_response("delete location", e),
    }
}
