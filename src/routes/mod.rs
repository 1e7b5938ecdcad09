// ============================================================================
// Axum Routes Module
// ============================================================================
//
// Structure:
// - mod.rs: Main router assembly and middleware
// - health.rs: Health check and metrics endpoints
// - contact.rs: Contact form submission and its public config
// - portfolio.rs: Static portfolio content
// - extractors.rs: Form-or-JSON contact payload extractor
// - middleware.rs: Request logging, security headers
//
// ============================================================================

mod contact;
mod extractors;
mod health;
mod middleware;
mod portfolio;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use portfolio_config::MAX_REQUEST_BODY_SIZE;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::context::AppContext;

/// Create the main application router with all routes
pub fn create_router(app_context: Arc<AppContext>) -> Router {
    Router::new()
        // Health and monitoring
        .route("/health", get(health::health_check))
        .route("/metrics", get(health::metrics))
        // Contact form
        .route("/api/contact", post(contact::submit_contact))
        .route("/api/contact/config", get(contact::contact_config))
        // Site content
        .route("/api/portfolio", get(portfolio::get_portfolio))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_SIZE))
        // Apply middleware (order matters - last added runs first)
        .layer(
            ServiceBuilder::new()
                // Tracing layer (outermost - runs first)
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(middleware::request_logging))
                .layer(axum::middleware::from_fn(middleware::add_security_headers))
                .into_inner(),
        )
        .with_state(app_context)
}
