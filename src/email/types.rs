use portfolio_config::EmailConfig;
use serde::{Deserialize, Serialize};

/// Fixed envelope of every contact email
#[derive(Debug, Clone)]
pub struct Mailbox {
    pub from: String,
    pub to: String,
    pub subject: String,
}

impl From<&EmailConfig> for Mailbox {
    fn from(config: &EmailConfig) -> Self {
        Self {
            from: config.from.clone(),
            to: config.to.clone(),
            subject: config.subject.clone(),
        }
    }
}

/// Body of `POST /emails`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    /// The submitter's address, so replying reaches them directly
    pub reply_to: String,
    pub html: String,
    pub text: String,
}

/// Provider acknowledgement, returned to the browser as `data`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendReceipt {
    pub id: String,
}
