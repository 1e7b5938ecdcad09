use anyhow::Result;
use portfolio_config::Config;
use std::sync::Arc;

use crate::contact::ContactPipeline;
use crate::email::{Mailbox, ResendClient};
use crate::portfolio::Portfolio;
use crate::recaptcha::{BotVerifier, RecaptchaClient};

/// Application context containing shared dependencies
/// Built once at startup; cloned cheaply into every handler.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<Config>,
    pub pipeline: Arc<ContactPipeline>,
    pub portfolio: Arc<Portfolio>,
}

impl AppContext {
    /// Creates a new application context
    pub fn new(config: Arc<Config>, pipeline: Arc<ContactPipeline>, portfolio: Arc<Portfolio>) -> Self {
        Self {
            config,
            pipeline,
            portfolio,
        }
    }

    /// Wires the production collaborators (Resend, reCAPTCHA) from configuration
    pub fn from_config(config: Arc<Config>) -> Result<Self> {
        let sender = Arc::new(ResendClient::new(&config.email, config.outbound_timeout)?);

        let verifier = RecaptchaClient::from_config(&config.recaptcha, config.outbound_timeout)?
            .map(|client| Arc::new(client) as Arc<dyn BotVerifier>);
        if verifier.is_none() {
            tracing::warn!("RECAPTCHA_SECRET_KEY not set - bot-score verification disabled");
        }

        let pipeline = ContactPipeline::new(
            sender,
            verifier,
            Mailbox::from(&config.email),
            config.recaptcha.min_score,
        );

        Ok(Self::new(
            config,
            Arc::new(pipeline),
            Arc::new(Portfolio::load()?),
        ))
    }
}
