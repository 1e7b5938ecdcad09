// ============================================================================
// Health and Metrics Routes
// ============================================================================
//
// Endpoints:
// - GET /health - Liveness check
// - GET /metrics - Prometheus metrics
//
// ============================================================================

use axum::{http::StatusCode, response::IntoResponse};

use crate::error::AppError;
use crate::metrics;

/// GET /health
///
/// The service has no local dependencies worth probing; the upstream
/// providers are checked per request instead.
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// GET /metrics
/// Prometheus metrics endpoint
pub async fn metrics() -> Result<impl IntoResponse, AppError> {
    let metrics_data =
        metrics::gather_metrics().map_err(|e| AppError::Internal(e.to_string()))?;

    Ok((
        StatusCode::OK,
        [("Content-Type", "text/plain; version=0.0.4")],
        metrics_data,
    ))
}
