use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use artboard_api::{build_router, AppState};
use artboard_infrastructure::{SupabaseAuthClient, TracingReportSink};
use artboard_shared::config::AppConfig;
use artboard_shared::telemetry::init_telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (.env, config files, environment)
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize telemetry; the guard flushes the file writer on exit
    let _log_guard = init_telemetry(&config.log)?;

    info!(name = %config.app.name, env = %config.app.env, "Artboard server starting...");

    // One HTTP client for the whole process
    let auth_client = SupabaseAuthClient::new(&config.supabase, config.auth.timeout_seconds)
        .context("Failed to build auth client")?;
    info!(url = %config.supabase.url, "Auth service client ready");

    // Create App State
    let state = AppState::new(Arc::new(auth_client), Arc::new(TracingReportSink), &config)
        .context("Invalid route rules")?;
    info!(rules = state.rules.len(), "Route rules loaded");

    let app = build_router(state);

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Artboard server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
