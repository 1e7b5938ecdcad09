// ============================================================================
// Email (Resend) Configuration
// ============================================================================

use anyhow::{Result, bail};

use crate::constants::*;

/// Settings for the transactional email provider
#[derive(Clone)]
pub struct EmailConfig {
    /// Resend API key (required)
    pub api_key: String,
    /// Base URL of the Resend API, overridable for tests and self-hosted relays
    pub api_url: String,
    /// Fixed `from` header of every contact email
    pub from: String,
    /// Mailbox that receives contact messages
    pub to: String,
    pub subject: String,
}

impl EmailConfig {
    pub(crate) fn from_lookup(get: &impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = match get("RESEND_API_KEY") {
            Some(key) if !key.trim().is_empty() => key.trim().to_string(),
            _ => bail!("RESEND_API_KEY must be set"),
        };

        Ok(Self {
            api_key,
            api_url: get("RESEND_API_URL")
                .filter(|v| !v.is_empty())
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_RESEND_API_URL.to_string()),
            from: get("CONTACT_FROM")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_CONTACT_FROM.to_string()),
            to: get("CONTACT_TO")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_CONTACT_TO.to_string()),
            subject: get("CONTACT_SUBJECT")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_CONTACT_SUBJECT.to_string()),
        })
    }
}

// The API key must never end up in logs
impl std::fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailConfig")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("from", &self.from)
            .field("to", &self.to)
            .field("subject", &self.subject)
            .finish()
    }
}
