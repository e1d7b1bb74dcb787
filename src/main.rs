use anyhow::{Context, Result};
use dotenv::dotenv;
use log::info;
use std::sync::Arc;
use tokio::net::TcpListener;

use sonobook::{models::AppState, router, utils::init_logging, AppConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    init_logging().map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    let config = AppConfig::from_env()?;
    let bind_addr = config.bind_addr;

    let shared_state = Arc::new(AppState::from_config(config).context("Failed to build HTTP client")?);
    info!(
        "Relaying bookings to {} ({:?})",
        shared_state.relay.endpoint(),
        shared_state.relay.mode()
    );
    if shared_state.mailer.is_none() {
        info!("MAIL_API_KEY/MAIL_FROM not set, /api/submit will answer 500");
    }
    let app = router(shared_state);

    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;
    info!("Server running on http://{}", bind_addr);
    axum::serve(listener, app)
        .await
        .context("Server stopped unexpectedly")
}
