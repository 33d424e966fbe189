//! # REST API for the SMTP Relay

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use tracing::{error, info};

use super::error_response;
use crate::backend::domain::DomainError;
use crate::backend::AppState;
use shared::{HealthResponse, SendEmailRequest, SendEmailResponse};

/// Relay one email. The SMTP handshake blocks, so it runs off the async
/// worker threads.
pub async fn send_email(
    State(state): State<AppState>,
    Json(request): Json<SendEmailRequest>,
) -> Response {
    info!("POST /api/send-email - to: {:?}", request.to);

    let email_service = state.email_service.clone();
    let result = tokio::task::spawn_blocking(move || {
        email_service.send(
            request.to.as_deref(),
            request.subject.as_deref(),
            request.body.as_deref(),
        )
    })
    .await;

    match result {
        Ok(Ok(())) => Json(SendEmailResponse { success: true }).into_response(),
        Ok(Err(e)) => error_response("send email", e),
        Err(e) => {
            error!("send email task failed: {e}");
            error_response("send email", DomainError::Transport(e.to_string()))
        }
    }
}

/// Liveness probe reporting the relay configuration; no side effects.
/// Only set/not-set flags go out, never the configured address.
pub async fn health(State(state): State<AppState>) -> Response {
    let snapshot = state.email_service.health();
    Json(HealthResponse {
        status: "ok".to_string(),
        smtp: if snapshot.configured {
            "configured".to_string()
        } else {
            "not configured".to_string()
        },
        admin_email: if snapshot.admin_email_set {
            "set".to_string()
        } else {
            "not set".to_string()
        },
    })
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::io::rest::test_support::test_state;

    #[tokio::test]
    async fn unconfigured_relay_reports_server_error() {
        let (state, _temp_dir) = test_state();
        let response = send_email(
            State(state),
            Json(SendEmailRequest {
                to: Some("a@b.example".to_string()),
                subject: Some("subject".to_string()),
                body: Some("body".to_string()),
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn missing_fields_are_bad_request() {
        let (state, _temp_dir) = test_state();
        let response = send_email(State(state), Json(SendEmailRequest::default())).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn health_reports_unconfigured_smtp() {
        let (state, _temp_dir) = test_state();
        let response = health(State(state)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn health_never_echoes_the_admin_address() {
        use crate::backend::config::AppConfig;
        use crate::backend::domain::email_service::EmailConfig;
        use crate::backend::initialize_backend;

        let temp_dir = tempfile::TempDir::new().unwrap();
        let config = AppConfig {
            port: 0,
            data_directory: temp_dir.path().to_path_buf(),
            email: EmailConfig {
                admin_email: Some("admin@gan.example".to_string()),
                smtp_port: 587,
                ..Default::default()
            },
        };
        let state = initialize_backend(&config).unwrap();

        let response = health(State(state)).await;
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: HealthResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.admin_email, "set");
        assert!(!String::from_utf8_lossy(&bytes).contains("admin@gan.example"));
    }
}
