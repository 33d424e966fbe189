//! # REST API Interface Layer
//!
//! HTTP endpoints for the kindergarten debt manager. This layer handles:
//! - Request/response serialization against the `shared` DTOs
//! - Error translation from domain errors to HTTP status codes
//! - Request logging
//!
//! Business logic stays in the domain services; handlers only translate.
//!
//! Stale-identifier updates and deletes are reported as success with an
//! absent record (`null` body or a `deleted: false` flag), mirroring the
//! silent no-op contract of the domain layer.

pub mod comment_apis;
pub mod email_apis;
pub mod export_apis;
pub mod family_apis;
pub mod location_apis;
pub mod notification_apis;
pub mod settings_apis;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use shared::ErrorResponse;
use tracing::error;

use crate::backend::domain::DomainError;

/// Map a domain error to its HTTP status.
fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Validation(_) | DomainError::Format(_) => StatusCode::BAD_REQUEST,
        DomainError::Duplicate(_) => StatusCode::CONFLICT,
        DomainError::NotFound(_) => StatusCode::NOT_FOUND,
        DomainError::Transport(_) | DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Uniform error response body. Storage failures are logged server-side.
pub(crate) fn error_response(context: &str, error: DomainError) -> Response {
    if matches!(error, DomainError::Storage(_)) {
        error!("{context}: {error}");
    }
    (
        status_for(&error),
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}

#[cfg(test)]
pub(crate) mod test_support {
    use tempfile::TempDir;

    use crate::backend::config::AppConfig;
    use crate::backend::domain::email_service::EmailConfig;
    use crate::backend::{initialize_backend, AppState};

    /// Backend over a throwaway data directory, SMTP left unconfigured.
    pub fn test_state() -> (AppState, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config = AppConfig {
            port: 0,
            data_directory: temp_dir.path().to_path_buf(),
            email: EmailConfig {
                smtp_port: 587,
                ..Default::default()
            },
        };
        (initialize_backend(&config).unwrap(), temp_dir)
    }
}
