//! # REST API for Family Management
//!
//! Endpoints for creating, retrieving, updating, and deleting families,
//! plus the filtered list view and the dashboard aggregates.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use tracing::info;

use super::error_response;
use crate::backend::domain::commands::family::{CreateFamilyCommand, UpdateFamilyCommand};
use crate::backend::domain::models::family::Family;
use crate::backend::domain::queries::{self, FamilyFilter};
use crate::backend::AppState;
use shared::{CreateFamilyRequest, DeleteFamilyResponse, UpdateFamilyRequest};

#[derive(Debug, Deserialize)]
pub struct FamilyListQuery {
    pub search: Option<String>,
    pub location: Option<String>,
}

/// List families, optionally filtered by free text and/or location
pub async fn list_families(
    State(state): State<AppState>,
    Query(query): Query<FamilyListQuery>,
) -> Response {
    info!("GET /api/families - search: {:?}, location: {:?}", query.search, query.location);

    match state.family_service.list_families() {
        Ok(families) => {
            let filter = FamilyFilter {
                search: query.search,
                location: query.location,
            };
            let filtered: Vec<shared::Family> = queries::filter_families(&families, &filter)
                .iter()
                .map(Family::to_dto)
                .collect();
            Json(filtered).into_response()
        }
        Err(e) => error_response("list families", e),
    }
}

/// Register a new family
pub async fn create_family(
    State(state): State<AppState>,
    Json(request): Json<CreateFamilyRequest>,
) -> Response {
    info!("POST /api/families - {}", request.family_name);

    let command = CreateFamilyCommand {
        family_code: request.family_code,
        family_name: request.family_name,
        father_name: request.father_name,
        mother_name: request.mother_name,
        phone: request.phone,
        location: request.location,
        debt_amount: request.debt_amount,
    };
    match state.family_service.create_family(command) {
        Ok(family) => (StatusCode::CREATED, Json(family.to_dto())).into_response(),
        Err(e) => error_response("create family", e),
    }
}

/// Get a family by ID
pub async fn get_family(State(state): State<AppState>, Path(family_id): Path<String>) -> Response {
    info!("GET /api/families/{}", family_id);

    match state.family_service.get_family(&family_id) {
        Ok(Some(family)) => Json(family.to_dto()).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(shared::ErrorResponse {
                error: format!("family not found: {family_id}"),
            }),
        )
            .into_response(),
        Err(e) => error_response("get family", e),
    }
}

/// Patch a family; unknown identifiers yield a `null` body
pub async fn update_family(
    State(state): State<AppState>,
    Path(family_id): Path<String>,
    Json(request): Json<UpdateFamilyRequest>,
) -> Response {
    info!("PUT /api/families/{}", family_id);

    let patch = UpdateFamilyCommand {
        family_code: request.family_code,
        family_name: request.family_name,
        father_name: request.father_name,
        mother_name: request.mother_name,
        phone: request.phone,
        location: request.location,
        debt_amount: request.debt_amount,
    };
    match state.family_service.update_family(&family_id, patch) {
        Ok(family) => Json(family.map(|f| f.to_dto())).into_response(),
        Err(e) => error_response("update family", e),
    }
}

/// Delete a family and cascade to its comments and notifications
pub async fn delete_family(
    State(state): State<AppState>,
    Path(family_id): Path<String>,
) -> Response {
    info!("DELETE /api/families/{}", family_id);

    match state.family_service.delete_family(&family_id) {
        Ok(result) => Json(DeleteFamilyResponse {
            deleted: result.deleted,
            comments_removed: result.comments_removed,
            notifications_removed: result.notifications_removed,
        })
        .into_response(),
        Err(e) => error_response("delete family", e),
    }
}

/// Aggregate numbers for the dashboard view
pub async fn dashboard(State(state): State<AppState>) -> Response {
    info!("GET /api/dashboard");

    let families = match state.family_service.list_families() {
        Ok(families) => families,
        Err(e) => return error_response("dashboard", e),
    };
    let locations = match state.location_service.list_locations() {
        Ok(locations) => locations,
        Err(e) => return error_response("dashboard", e),
    };
    let notifications = match state.notification_service.list_notifications() {
        Ok(notifications) => notifications,
        Err(e) => return error_response("dashboard", e),
    };

    Json(queries::dashboard_summary(&families, &locations, &notifications)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::io::rest::test_support::test_state;

    fn create_request(name: &str) -> CreateFamilyRequest {
        CreateFamilyRequest {
            family_code: "F-01".to_string(),
            family_name: name.to_string(),
            father_name: "David".to_string(),
            mother_name: "Rachel".to_string(),
            phone: "0501234567".to_string(),
            location: "Room A".to_string(),
            debt_amount: Some(100.0),
        }
    }

    #[tokio::test]
    async fn create_family_returns_created() {
        let (state, _temp_dir) = test_state();
        let response = create_family(State(state), Json(create_request("Cohen"))).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn get_unknown_family_is_not_found() {
        let (state, _temp_dir) = test_state();
        let response = get_family(State(state), Path("family::missing".to_string())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_unknown_family_succeeds_with_null_body() {
        let (state, _temp_dir) = test_state();
        let response = update_family(
            State(state),
            Path("family::missing".to_string()),
            Json(UpdateFamilyRequest::default()),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn delete_unknown_family_reports_deleted_false() {
        let (state, _temp_dir) = test_state();
        let response = delete_family(State(state), Path("family::missing".to_string())).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
