use axum::http::StatusCode;
use thiserror::Error;

/// Why a submission was not relayed. The display text is shown to the
/// submitter as-is.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Rejection {
    #[error("Spam detected")]
    Honeypot,

    #[error("Please take a moment before submitting.")]
    TooFast,

    /// A token arrived but the server has no shared secret to check it with
    #[error("Bot verification is not configured.")]
    VerificationMisconfigured,

    #[error("Unable to verify submission. Please try again.")]
    VerificationUnavailable,

    #[error("Bot verification failed.")]
    VerificationFailed,

    #[error("Message flagged as spam.")]
    ContentFlagged,

    #[error("Invalid sender email")]
    InvalidSender,

    #[error("Invalid message")]
    InvalidMessage,

    /// Email provider error, message text passed through
    #[error("{0}")]
    SendFailed(String),
}

impl Rejection {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Rejection::Honeypot
            | Rejection::TooFast
            | Rejection::VerificationFailed
            | Rejection::InvalidSender
            | Rejection::InvalidMessage => StatusCode::BAD_REQUEST,
            Rejection::ContentFlagged => StatusCode::UNPROCESSABLE_ENTITY,
            Rejection::VerificationMisconfigured => StatusCode::INTERNAL_SERVER_ERROR,
            Rejection::VerificationUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Rejection::SendFailed(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Short stable label for metrics and structured logs
    pub fn label(&self) -> &'static str {
        match self {
            Rejection::Honeypot => "honeypot",
            Rejection::TooFast => "too_fast",
            Rejection::VerificationMisconfigured => "verification_misconfigured",
            Rejection::VerificationUnavailable => "verification_unavailable",
            Rejection::VerificationFailed => "verification_failed",
            Rejection::ContentFlagged => "content_flagged",
            Rejection::InvalidSender => "invalid_sender",
            Rejection::InvalidMessage => "invalid_message",
            Rejection::SendFailed(_) => "send_failed",
        }
    }
}
