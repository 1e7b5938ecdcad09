use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;
use thiserror::Error;

use crate::contact::Rejection;

pub type AppResult<T> = Result<T, AppError>;

/// Application error type for HTTP handlers
///
/// Every variant renders as `{"error": "...", "error_code": "..."}` so the
/// browser can show the text in a toast without inspecting the status.
#[derive(Error, Debug)]
pub enum AppError {
    // ===== Contact Pipeline =====
    #[error(transparent)]
    Rejected(#[from] Rejection),

    // ===== Request Errors =====
    #[error("Validation error: {0}")]
    Validation(String),

    // ===== Internal Server Errors =====
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Rejected(rejection) => rejection.status_code(),
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a user-friendly error message (without sensitive details)
    pub fn user_message(&self) -> String {
        match self {
            // Rejection texts are written for the submitter
            AppError::Rejected(rejection) => rejection.to_string(),
            AppError::Validation(msg) => msg.clone(),
            _ => "Internal server error".to_string(),
        }
    }

    /// Get error code for programmatic error handling
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Rejected(_) => "SUBMISSION_REJECTED",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Log this error with appropriate level and context
    pub fn log(&self) {
        let status = self.status_code();
        let code = self.error_code();

        match self {
            // Rejections are logged by the contact route with their label
            AppError::Rejected(_) => {}
            _ if status.is_server_error() => {
                tracing::error!(
                    error = %self,
                    error_code = %code,
                    status = %status.as_u16(),
                    "Server error occurred"
                );
            }
            _ => {
                tracing::debug!(
                    error = %self,
                    error_code = %code,
                    "Client error occurred"
                );
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        self.log();

        let status = self.status_code();
        let body = json!({
            "error": self.user_message(),
            "error_code": self.error_code(),
        });

        (status, Json(body)).into_response()
    }
}
