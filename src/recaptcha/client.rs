use anyhow::{Context, Result};
use portfolio_config::RecaptchaConfig;
use std::time::Duration;

use super::{BotVerifier, SiteVerifyResponse};

/// reCAPTCHA siteverify client.
///
/// Only built when a shared secret is configured.
#[derive(Clone)]
pub struct RecaptchaClient {
    http_client: reqwest::Client,
    verify_url: String,
    secret: String,
}

impl RecaptchaClient {
    /// Returns `None` when no secret is configured
    pub fn from_config(config: &RecaptchaConfig, timeout: Duration) -> Result<Option<Self>> {
        let Some(secret) = config.secret_key.clone() else {
            return Ok(None);
        };

        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create reCAPTCHA HTTP client")?;

        Ok(Some(Self {
            http_client,
            verify_url: config.verify_url.clone(),
            secret,
        }))
    }
}

#[async_trait::async_trait]
impl BotVerifier for RecaptchaClient {
    async fn verify(&self, token: &str) -> Result<SiteVerifyResponse> {
        let response = self
            .http_client
            .post(&self.verify_url)
            .form(&[("secret", self.secret.as_str()), ("response", token)])
            .send()
            .await
            .context("siteverify request failed")?;

        if !response.status().is_success() {
            anyhow::bail!("siteverify returned HTTP {}", response.status());
        }

        let reply: SiteVerifyResponse = response
            .json()
            .await
            .context("siteverify returned an unreadable body")?;

        tracing::debug!(
            success = reply.success,
            score = ?reply.score,
            action = ?reply.action,
            error_codes = ?reply.error_codes,
            "siteverify reply"
        );

        Ok(reply)
    }
}
