use std::net::SocketAddr;

use tracing::{info, warn, Level};

mod backend;

use backend::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let config = AppConfig::from_env();
    info!("Starting kindergarten debt manager backend");

    let app_state = backend::initialize_backend(&config)?;

    if app_state.email_service.is_configured() {
        info!("SMTP configured ({})", config.email.smtp_host.as_deref().unwrap_or(""));
    } else {
        warn!("SMTP not configured - email sending disabled");
        warn!("Set SMTP_HOST, SMTP_USER, SMTP_PASS in the environment to enable it");
    }
    if config.email.admin_email.is_some() {
        info!("Admin email set - it overrides client-provided recipients");
    } else {
        warn!("ADMIN_EMAIL not set - emails will use the client-provided address");
    }

    let app = backend::create_router(app_state);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
