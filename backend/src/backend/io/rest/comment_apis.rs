//! # REST API for Comments
//!
//! Endpoints for the comments attached to a family, including the
//! comment-and-send flow that records a comment, logs a sent notification
//! of the same text and hands back the WhatsApp link.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use tracing::info;

use super::error_response;
use crate::backend::domain::commands::comment::CreateCommentCommand;
use crate::backend::domain::commands::notification::CreateNotificationCommand;
use crate::backend::domain::models::comment::Comment;
use crate::backend::domain::models::notification::NotificationSource;
use crate::backend::domain::queries;
use crate::backend::AppState;
use shared::{CreateCommentRequest, UpdateCommentRequest, WhatsappSendResponse};

/// List a family's comments, newest first
pub async fn list_comments(
    State(state): State<AppState>,
    Path(family_id): Path<String>,
) -> Response {
    info!("GET /api/families/{}/comments", family_id);

    match state.comment_service.list_comments() {
        Ok(comments) => {
            let owned: Vec<shared::Comment> = queries::comments_for_family(&comments, &family_id)
                .iter()
                .map(Comment::to_dto)
                .collect();
            Json(owned).into_response()
        }
        Err(e) => error_response("list comments", e),
    }
}

/// Attach a comment to a family
pub async fn create_comment(
    State(state): State<AppState>,
    Path(family_id): Path<String>,
    Json(request): Json<CreateCommentRequest>,
) -> Response {
    info!("POST /api/families/{}/comments", family_id);

    let command = CreateCommentCommand {
        family_id,
        description: request.description,
    };
    match state.comment_service.create_comment(command) {
        Ok(comment) => (StatusCode::CREATED, Json(comment.to_dto())).into_response(),
        Err(e) => error_response("create comment", e),
    }
}

/// Record a comment, log it as a sent notification and return the WhatsApp
/// link for immediate delivery
pub async fn send_comment_whatsapp(
    State(state): State<AppState>,
    Path(family_id): Path<String>,
    Json(request): Json<CreateCommentRequest>,
) -> Response {
    info!("POST /api/families/{}/comments/send", family_id);

    let family = match state.family_service.get_family(&family_id) {
        Ok(Some(family)) => family,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(shared::ErrorResponse {
                    error: format!("family not found: {family_id}"),
                }),
            )
                .into_response()
        }
        Err(e) => return error_response("send comment", e),
    };

    let comment = match state.comment_service.create_comment(CreateCommentCommand {
        family_id: family_id.clone(),
        description: request.description,
    }) {
        Ok(comment) => comment,
        Err(e) => return error_response("send comment", e),
    };

    // Born sent: delivery happens when the client opens the link
    let notification = match state
        .notification_service
        .create_notification(CreateNotificationCommand {
            family_id,
            message: comment.description.clone(),
            source: NotificationSource::Comment,
        }) {
        Ok(notification) => notification,
        Err(e) => return error_response("send comment", e),
    };

    match state.notification_service.compose_link(&family, &notification.message) {
        Ok(url) => Json(WhatsappSendResponse {
            url,
            notification: notification.to_dto(),
        })
        .into_response(),
        Err(e) => error_response("send comment", e),
    }
}

/// Edit a comment; unknown identifiers yield a `null` body
pub async fn update_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
    Json(request): Json<UpdateCommentRequest>,
) -> Response {
    info!("PUT /api/comments/{}", comment_id);

    match state.comment_service.update_comment(&comment_id, &request.description) {
        Ok(comment) => Json(comment.map(|c| c.to_dto())).into_response(),
        Err(e) => error_response("update comment", e),
    }
}

/// Delete a comment
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
) -> Response {
    info!("DELETE /api/comments/{}", comment_id);

    match state.comment_service.delete_comment(&comment_id) {
        Ok(deleted) => Json(json!({ "deleted": deleted })).into_response(),
        Err(e) => error_response("delete comment", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::commands::family::CreateFamilyCommand;
    use crate::backend::io::rest::test_support::test_state;
    use crate::backend::AppState;

    fn seeded_family(state: &AppState) -> String {
        state
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
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn create_comment_for_missing_family_is_not_found() {
        let (state, _temp_dir) = test_state();
        let response = create_comment(
            State(state),
            Path("family::missing".to_string()),
            Json(CreateCommentRequest {
                description: "note".to_string(),
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn send_records_comment_and_sent_notification() {
        let (state, _temp_dir) = test_state();
        let family_id = seeded_family(&state);

        let response = send_comment_whatsapp(
            State(state.clone()),
            Path(family_id.clone()),
            Json(CreateCommentRequest {
                description: "please settle up".to_string(),
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let comments = state.comment_service.list_comments().unwrap();
        assert_eq!(comments.len(), 1);
        let notifications = state.notification_service.list_notifications().unwrap();
        assert_eq!(notifications.len(), 1);
        assert!(notifications[0].is_sent);
        assert_eq!(notifications[0].family_id, family_id);
    }
}
