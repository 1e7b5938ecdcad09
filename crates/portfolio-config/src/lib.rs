// ============================================================================
// Portfolio Config - Centralized configuration management
// ============================================================================
//
// All secrets and tunables of the portfolio server are collected here and
// validated once at startup. Only the email API key is mandatory; the
// bot-verification keys degrade gracefully when absent.
//
// ============================================================================

mod constants;
mod email;
mod logging;
mod recaptcha;

pub use constants::{
    MAX_MESSAGE_LEN, MAX_REQUEST_BODY_SIZE, MAX_SENDER_LEN, MIN_FILL_MILLIS, RECAPTCHA_ACTION,
};
pub use email::EmailConfig;
pub use logging::LoggingConfig;
pub use recaptcha::RecaptchaConfig;

use anyhow::{Context, Result};
use constants::*;
use std::time::Duration;

/// Main configuration structure for the portfolio server
#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    /// Full socket address to bind, e.g. "0.0.0.0:3000"
    pub bind_address: String,
    /// Timeout applied to every outbound HTTP call
    pub outbound_timeout: Duration,

    // Sub-configurations
    pub email: EmailConfig,
    pub recaptcha: RecaptchaConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the process environment (and `.env`, if present)
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let email = EmailConfig::from_lookup(&get).context("Invalid email configuration")?;
        let recaptcha = RecaptchaConfig::from_lookup(&get);
        let logging = LoggingConfig::from_lookup(&get);

        let port = get("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let host = get("BIND_ADDRESS")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_HOST.to_string());

        let outbound_timeout_secs = get("OUTBOUND_TIMEOUT_SECS")
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|s| *s > 0)
            .unwrap_or(DEFAULT_OUTBOUND_TIMEOUT_SECS);

        Ok(Self {
            port,
            bind_address: format!("{}:{}", host, port),
            outbound_timeout: Duration::from_secs(outbound_timeout_secs),
            email,
            recaptcha,
            logging,
        })
    }
}
