use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod contact;
pub mod context;
pub mod email;
pub mod error;
pub mod metrics;
pub mod portfolio;
pub mod recaptcha;
pub mod routes;
pub mod utils;

pub use portfolio_config::Config;

use context::AppContext;

/// Serve the API on an already-bound listener until ctrl-c
pub async fn serve(listener: TcpListener, app_context: AppContext) -> Result<()> {
    let app = routes::create_router(Arc::new(app_context));

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("HTTP server failed")
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received. Shutting down...");
}

pub async fn run() -> Result<()> {
    // Load configuration
    let config = Arc::new(Config::from_env()?);

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        bind_address = %config.bind_address,
        recaptcha_enabled = config.recaptcha.is_enabled(),
        outbound_timeout_secs = config.outbound_timeout.as_secs(),
        "Portfolio server starting"
    );

    let app_context = AppContext::from_config(config.clone())?;

    let listener = TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_address))?;
    tracing::info!("Portfolio server listening on http://{}", config.bind_address);

    serve(listener, app_context).await
}
