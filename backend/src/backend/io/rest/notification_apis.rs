//! # REST API for Notifications
//!
//! Endpoints for the notification log and the WhatsApp dispatch flow.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use tracing::info;

use super::error_response;
use crate::backend::domain::commands::notification::CreateNotificationCommand;
use crate::backend::domain::models::notification::{Notification, NotificationSource};
use crate::backend::domain::queries;
use crate::backend::AppState;
use shared::{CreateNotificationRequest, WhatsappSendResponse};

/// List all notifications, newest first
pub async fn list_notifications(State(state): State<AppState>) -> Response {
    info!("GET /api/notifications");

    match state.notification_service.list_notifications() {
        Ok(notifications) => {
            let sorted: Vec<shared::Notification> =
                queries::notifications_by_recency(&notifications)
                    .iter()
                    .map(Notification::to_dto)
                    .collect();
            Json(sorted).into_response()
        }
        Err(e) => error_response("list notifications", e),
    }
}

/// Record a notification for a family
pub async fn create_notification(
    State(state): State<AppState>,
    Json(request): Json<CreateNotificationRequest>,
) -> Response {
    info!("POST /api/notifications - family: {}", request.family_id);

    let command = CreateNotificationCommand {
        family_id: request.family_id,
        message: request.message,
        source: NotificationSource::from_dto(request.source),
    };
    match state.notification_service.create_notification(command) {
        Ok(notification) => (StatusCode::CREATED, Json(notification.to_dto())).into_response(),
        Err(e) => error_response("create notification", e),
    }
}

/// Delete a notification
pub async fn delete_notification(
    State(state): State<AppState>,
    Path(notification_id): Path<String>,
) -> Response {
    info!("DELETE /api/notifications/{}", notification_id);

    match state.notification_service.delete_notification(&notification_id) {
        Ok(deleted) => Json(json!({ "deleted": deleted })).into_response(),
        Err(e) => error_response("delete notification", e),
    }
}

/// Mark a notification sent and return its WhatsApp link
pub async fn send_notification_whatsapp(
    State(state): State<AppState>,
    Path(notification_id): Path<String>,
) -> Response {
    info!("POST /api/notifications/{}/send", notification_id);

    match state.notification_service.send_notification_whatsapp(&notification_id) {
        Ok(dispatch) => Json(WhatsappSendResponse {
            url: dispatch.url,
            notification: dispatch.notification.to_dto(),
        })
        .into_response(),
        Err(e) => error_response("send notification", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::commands::family::CreateFamilyCommand;
    use crate::backend::io::rest::test_support::test_state;

    #[tokio::test]
    async fn dispatch_unknown_notification_is_not_found() {
        let (state, _temp_dir) = test_state();
        let response =
            send_notification_whatsapp(State(state), Path("notification::missing".to_string()))
                .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn create_and_dispatch_round_trip() {
        let (state, _temp_dir) = test_state();
        let family = state
            .family_service
            .create_family(CreateFamilyCommand {
                family_code: "F-01".to_string(),
                family_name: "Cohen".to_string(),
                father_name: "David".to_string(),
                mother_name: "Rachel".to_string(),
                phone: "0501234567".to_string(),
                location: "Room A".to_string(),
                debt_amount: None,
            })
            .unwrap();

        let created = create_notification(
            State(state.clone()),
            Json(CreateNotificationRequest {
                family_id: family.id,
                message: "pay up".to_string(),
                source: shared::NotificationSource::Direct,
            }),
        )
        .await;
        assert_eq!(created.status(), StatusCode::CREATED);

        let stored = state.notification_service.list_notifications().unwrap();
        assert_eq!(stored.len(), 1);
        assert!(!stored[0].is_sent);

        let sent = send_notification_whatsapp(State(state.clone()), Path(stored[0].id.clone())).await;
        assert_eq!(sent.status(), StatusCode::OK);
        let after = state.notification_service.list_notifications().unwrap();
        assert!(after[0].is_sent);
    }
}
