// ============================================================================
// Axum Extractors
// ============================================================================
//
// - ContactPayload: contact form body, either form-encoded (plain HTML form
//   post) or JSON (fetch from the terminal-style widget)
//
// ============================================================================

use axum::{
    Form, Json, async_trait,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};

use crate::contact::ContactForm;
use crate::error::AppError;

#[derive(Debug)]
pub struct ContactPayload(pub ContactForm);

#[async_trait]
impl<S> FromRequest<S> for ContactPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("application/json") {
            let Json(form) = Json::<ContactForm>::from_request(req, state)
                .await
                .map_err(|e| AppError::Validation(e.body_text()))?;
            Ok(Self(form))
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(form) = Form::<ContactForm>::from_request(req, state)
                .await
                .map_err(|e| AppError::Validation(e.body_text()))?;
            Ok(Self(form))
        } else {
            Err(AppError::Validation(
                "Expected a form-encoded or JSON body".to_string(),
            ))
        }
    }
}
