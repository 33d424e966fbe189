//! # Backend Module
//!
//! Contains all non-UI logic for the kindergarten debt manager.
//!
//! This module serves as the orchestration layer that brings together:
//! - **Domain**: Business rules for families, comments, notifications and locations
//! - **Storage**: JSON-slot persistence surviving process restarts
//! - **IO**: REST interface consumed by the browser frontend
//!
//! ## Architecture
//!
//! The backend follows a layered architecture:
//! ```text
//! IO Layer (REST API, handlers)
//!     |
//! Domain Layer (services, validation, cascades)
//!     |
//! Storage Layer (JSON slots, atomic writes)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use config::AppConfig;
use domain::{
    CommentService, EmailService, ExportService, FamilyService, LocationService, MutationLock,
    NotificationService, SettingsService,
};
use storage::json::{
    CommentRepository, FamilyRepository, JsonConnection, LocationRepository,
    NotificationRepository, SettingsRepository,
};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub family_service: FamilyService,
    pub comment_service: CommentService,
    pub notification_service: NotificationService,
    pub location_service: LocationService,
    pub settings_service: SettingsService,
    pub export_service: ExportService,
    pub email_service: Arc<EmailService>,
}

/// Initialize the backend with all required services
pub fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up storage in {:?}", config.data_directory);
    let connection = Arc::new(JsonConnection::new(&config.data_directory)?);

    let family_repository = FamilyRepository::new(connection.clone());
    let comment_repository = CommentRepository::new(connection.clone());
    let notification_repository = NotificationRepository::new(connection.clone());
    let location_repository = LocationRepository::new(connection.clone());
    let settings_repository = SettingsRepository::new(connection);

    info!("Setting up domain services");
    // One lock shared by every service running multi-step mutations
    let mutation_lock = MutationLock::new();
    let family_service = FamilyService::new(
        family_repository.clone(),
        comment_repository.clone(),
        notification_repository.clone(),
        mutation_lock.clone(),
    );
    let comment_service = CommentService::new(comment_repository.clone(), family_repository.clone());
    let notification_service = NotificationService::new(
        notification_repository.clone(),
        family_repository.clone(),
        settings_repository.clone(),
    );
    let location_service = LocationService::new(
        location_repository.clone(),
        family_repository.clone(),
        mutation_lock,
    );
    let settings_service = SettingsService::new(settings_repository.clone());
    let export_service = ExportService::new(
        family_repository,
        comment_repository,
        notification_repository,
        location_repository,
        settings_repository,
    );
    let email_service = Arc::new(EmailService::new(config.email.clone()));

    Ok(AppState {
        family_service,
        comment_service,
        notification_service,
        location_service,
        settings_service,
        export_service,
        email_service,
    })
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    // CORS setup to allow the frontend to make requests
    let cors = CorsLayer::new()
        .allow_origin("http://localhost:8080".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route(
            "/families",
            get(io::rest::family_apis::list_families).post(io::rest::family_apis::create_family),
        )
        .route(
            "/families/:family_id",
            get(io::rest::family_apis::get_family)
                .put(io::rest::family_apis::update_family)
                .delete(io::rest::family_apis::delete_family),
        )
        .route(
            "/families/:family_id/comments",
            get(io::rest::comment_apis::list_comments).post(io::rest::comment_apis::create_comment),
        )
        .route(
            "/families/:family_id/comments/send",
            post(io::rest::comment_apis::send_comment_whatsapp),
        )
        .route(
            "/comments/:comment_id",
            put(io::rest::comment_apis::update_comment)
                .delete(io::rest::comment_apis::delete_comment),
        )
        .route(
            "/notifications",
            get(io::rest::notification_apis::list_notifications)
                .post(io::rest::notification_apis::create_notification),
        )
        .route(
            "/notifications/:notification_id",
            axum::routing::delete(io::rest::notification_apis::delete_notification),
        )
        .route(
            "/notifications/:notification_id/send",
            post(io::rest::notification_apis::send_notification_whatsapp),
        )
        .route(
            "/locations",
            get(io::rest::location_apis::list_locations)
                .post(io::rest::location_apis::create_location),
        )
        .route(
            "/locations/:location_id",
            put(io::rest::location_apis::rename_location)
                .delete(io::rest::location_apis::delete_location),
        )
        .route(
            "/settings",
            get(io::rest::settings_apis::get_settings).put(io::rest::settings_apis::update_settings),
        )
        .route("/dashboard", get(io::rest::family_apis::dashboard))
        .route("/export", get(io::rest::export_apis::export_data))
        .route("/import", post(io::rest::export_apis::import_data))
        .route("/data", axum::routing::delete(io::rest::export_apis::clear_all_data))
        .route("/send-email", post(io::rest::email_apis::send_email))
        .route("/health", get(io::rest::email_apis::health));

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(app_state)
}
