// ============================================================================
// Email Dispatch
// ============================================================================
//
// Relays accepted contact messages through Resend. The pipeline depends on
// the `EmailSender` trait; `ResendClient` is the production implementation.
//
// ============================================================================

mod client;
pub mod template;
mod types;

pub use client::ResendClient;
pub use types::{Mailbox, OutgoingEmail, SendReceipt};

use thiserror::Error;

/// Provider failure. The message is what the submitter gets to see.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct SendError(pub String);

impl SendError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

#[async_trait::async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<SendReceipt, SendError>;
}
