// ============================================================================
// Bot-Score Verification
// ============================================================================
//
// Checks a client-supplied reCAPTCHA v3 token against Google's siteverify
// endpoint. The contact pipeline only talks to the `BotVerifier` trait so
// tests can substitute a canned verifier.
//
// ============================================================================

mod client;
mod types;

pub use client::RecaptchaClient;
pub use types::SiteVerifyResponse;

use anyhow::Result;

#[async_trait::async_trait]
pub trait BotVerifier: Send + Sync {
    /// Ask the scoring service about `token`.
    ///
    /// Errors mean the service could not be reached or answered garbage;
    /// a negative verdict is a successful call with `success == false` or a
    /// low score.
    async fn verify(&self, token: &str) -> Result<SiteVerifyResponse>;
}
