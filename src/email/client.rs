use anyhow::{Context, Result};
use portfolio_config::EmailConfig;
use serde::Deserialize;
use std::time::Duration;

use super::{EmailSender, OutgoingEmail, SendError, SendReceipt};

/// Resend API client, built once at startup and shared by all requests
#[derive(Clone)]
pub struct ResendClient {
    http_client: reqwest::Client,
    api_url: String,
    api_key: String,
}

/// Error body returned by Resend on non-2xx replies
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResendErrorBody {
    message: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    status_code: Option<u16>,
}

impl ResendClient {
    pub fn new(config: &EmailConfig, timeout: Duration) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create Resend HTTP client")?;

        Ok(Self {
            http_client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait::async_trait]
impl EmailSender for ResendClient {
    async fn send(&self, email: &OutgoingEmail) -> Result<SendReceipt, SendError> {
        let url = format!("{}/emails", self.api_url);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Resend request failed");
                SendError::new(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let Ok(error_body) = serde_json::from_str::<ResendErrorBody>(&body) else {
                tracing::error!(status = %status.as_u16(), "Resend rejected the email");
                return Err(SendError::new(format!(
                    "Email provider returned HTTP {}",
                    status.as_u16()
                )));
            };

            tracing::error!(
                status = %status.as_u16(),
                error_name = ?error_body.name,
                error_status = ?error_body.status_code,
                error = %error_body.message,
                "Resend rejected the email"
            );
            return Err(SendError::new(error_body.message));
        }

        response.json::<SendReceipt>().await.map_err(|e| {
            tracing::error!(error = %e, "Resend returned an unreadable body");
            SendError::new(e.to_string())
        })
    }
}
