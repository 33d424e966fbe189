//! # REST API for WhatsApp Template Settings

use axum::extract::State;
use axum::response::{IntoResponse, Json, Response};
use tracing::info;

use super::error_response;
use crate::backend::domain::commands::settings::UpdateSettingsCommand;
use crate::backend::AppState;
use shared::WhatsappSettings;

/// Current template settings; unset fields are omitted and the client is
/// expected to show the built-in defaults
pub async fn get_settings(State(state): State<AppState>) -> Response {
    info!("GET /api/settings");

    match state.settings_service.get_settings() {
        Ok(settings) => Json(settings.to_dto()).into_response(),
        Err(e) => error_response("get settings", e),
    }
}

/// Store new template values; blank fields reset to the defaults
pub async fn update_settings(
    State(state): State<AppState>,
    Json(request): Json<WhatsappSettings>,
) -> Response {
    info!("PUT /api/settings");

    let command = UpdateSettingsCommand {
        whatsapp_greeting: request.whatsapp_greeting,
        whatsapp_signature: request.whatsapp_signature,
    };
    match state.settings_service.update_settings(command) {
        Ok(settings) => Json(settings.to_dto()).into_response(),
        Err(e) => error_response("update settings", e),
    }
}
