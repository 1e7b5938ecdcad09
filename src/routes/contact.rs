// ============================================================================
// Contact Routes
// ============================================================================
//
// Endpoints:
// - POST /api/contact - Screen a submission and relay it by email
// - GET /api/contact/config - Public settings the form needs client-side
//
// ============================================================================

use axum::{
    Json,
    extract::{ConnectInfo, State},
    http::HeaderMap,
};
use portfolio_config::{MIN_FILL_MILLIS, RECAPTCHA_ACTION};
use serde::Serialize;
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::Arc;

use crate::contact::Submission;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::metrics;
use crate::routes::extractors::ContactPayload;
use crate::utils::{extract_client_ip, log_safe_id};

/// POST /api/contact
///
/// Success: `200 {"data": {"id": ...}}`.
/// Rejection: `{"error": "<reason>"}` with a 4xx/5xx status.
pub async fn submit_contact(
    State(ctx): State<Arc<AppContext>>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    ContactPayload(form): ContactPayload,
) -> AppResult<Json<Value>> {
    let submission = Submission::from(form);

    let client_ip = extract_client_ip(&headers, connect_info.map(|ConnectInfo(addr)| addr.ip()));
    let sender_hash = log_safe_id(&submission.sender_address, &ctx.config.logging.hash_salt);

    match ctx.pipeline.process(&submission).await {
        Ok(receipt) => {
            metrics::record_outcome("accepted");
            tracing::info!(
                sender = %sender_hash,
                client_ip = %client_ip,
                email_id = %receipt.id,
                "Contact message relayed"
            );
            Ok(Json(json!({ "data": receipt })))
        }
        Err(rejection) => {
            metrics::record_outcome(rejection.label());
            if rejection.status_code().is_server_error() {
                tracing::error!(
                    sender = %sender_hash,
                    client_ip = %client_ip,
                    reason = rejection.label(),
                    error = %rejection,
                    "Contact submission failed"
                );
            } else {
                tracing::info!(
                    sender = %sender_hash,
                    client_ip = %client_ip,
                    reason = rejection.label(),
                    "Contact submission rejected"
                );
            }
            Err(rejection.into())
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactConfigResponse {
    /// `null` tells the client not to load the reCAPTCHA script
    pub recaptcha_site_key: Option<String>,
    pub recaptcha_action: &'static str,
    pub min_fill_millis: i64,
}

/// GET /api/contact/config
pub async fn contact_config(State(ctx): State<Arc<AppContext>>) -> Json<ContactConfigResponse> {
    Json(ContactConfigResponse {
        recaptcha_site_key: ctx.config.recaptcha.site_key.clone(),
        recaptcha_action: RECAPTCHA_ACTION,
        min_fill_millis: MIN_FILL_MILLIS,
    })
}
