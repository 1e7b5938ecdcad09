use chrono::Utc;
use std::sync::Arc;

use super::{Rejection, Submission, checks};
use crate::email::{EmailSender, Mailbox, SendReceipt, template};
use crate::metrics;
use crate::recaptcha::BotVerifier;

/// Runs a submission through every check and, if it survives, hands it to
/// the email collaborator.
///
/// Holds no per-request state; one instance is shared by all requests.
pub struct ContactPipeline {
    sender: Arc<dyn EmailSender>,
    /// `None` when no verification secret is configured
    verifier: Option<Arc<dyn BotVerifier>>,
    mailbox: Mailbox,
    min_score: f64,
}

impl ContactPipeline {
    pub fn new(
        sender: Arc<dyn EmailSender>,
        verifier: Option<Arc<dyn BotVerifier>>,
        mailbox: Mailbox,
        min_score: f64,
    ) -> Self {
        Self {
            sender,
            verifier,
            mailbox,
            min_score,
        }
    }

    pub async fn process(&self, submission: &Submission) -> Result<SendReceipt, Rejection> {
        self.process_at(submission, Utc::now().timestamp_millis())
            .await
    }

    /// Same as [`process`](Self::process) with an explicit clock (epoch millis)
    pub async fn process_at(
        &self,
        submission: &Submission,
        now_ms: i64,
    ) -> Result<SendReceipt, Rejection> {
        checks::honeypot(submission)?;
        checks::timing(submission, now_ms)?;
        self.verify_bot_score(submission).await?;
        checks::content(submission)?;
        checks::fields(submission)?;
        self.dispatch(submission).await
    }

    async fn verify_bot_score(&self, submission: &Submission) -> Result<(), Rejection> {
        let Some(token) = submission.bot_score_token.as_deref() else {
            return Ok(());
        };

        let Some(verifier) = &self.verifier else {
            tracing::error!("Received a reCAPTCHA token but RECAPTCHA_SECRET_KEY is not set");
            return Err(Rejection::VerificationMisconfigured);
        };

        let reply = verifier.verify(token).await.map_err(|e| {
            tracing::warn!(error = %format!("{:#}", e), "Bot-score verification unavailable");
            Rejection::VerificationUnavailable
        })?;

        if let Some(action) = reply.action.as_deref()
            && action != portfolio_config::RECAPTCHA_ACTION
        {
            tracing::warn!(action = %action, "Unexpected reCAPTCHA action");
        }

        if reply.passes(self.min_score) {
            Ok(())
        } else {
            tracing::info!(
                success = reply.success,
                score = ?reply.score,
                error_codes = ?reply.error_codes,
                "Bot-score verification failed"
            );
            Err(Rejection::VerificationFailed)
        }
    }

    async fn dispatch(&self, submission: &Submission) -> Result<SendReceipt, Rejection> {
        let email = template::compose(
            &self.mailbox,
            &submission.sender_address,
            &submission.message_body,
        );

        let timer = metrics::CONTACT_DISPATCH_DURATION.start_timer();
        let result = self.sender.send(&email).await;
        timer.observe_duration();

        result.map_err(|e| Rejection::SendFailed(e.0))
    }
}
