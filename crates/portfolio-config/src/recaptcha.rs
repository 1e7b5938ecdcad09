// ============================================================================
// reCAPTCHA Configuration
// ============================================================================

use crate::constants::*;

/// Bot-score verification settings.
///
/// Both keys are optional: without a secret the server cannot verify tokens,
/// without a site key the browser never loads the reCAPTCHA script.
#[derive(Clone)]
pub struct RecaptchaConfig {
    pub secret_key: Option<String>,
    pub site_key: Option<String>,
    pub verify_url: String,
    /// Scores strictly below this value are treated as bots
    pub min_score: f64,
}

impl RecaptchaConfig {
    pub(crate) fn from_lookup(get: &impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| get(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Self {
            secret_key: non_empty("RECAPTCHA_SECRET_KEY"),
            site_key: non_empty("RECAPTCHA_SITE_KEY")
                .or_else(|| non_empty("NEXT_PUBLIC_RECAPTCHA_SITE_KEY")),
            verify_url: non_empty("RECAPTCHA_VERIFY_URL")
                .unwrap_or_else(|| DEFAULT_RECAPTCHA_VERIFY_URL.to_string()),
            min_score: get("RECAPTCHA_MIN_SCORE")
                .and_then(|s| s.parse::<f64>().ok())
                .filter(|s| (0.0..=1.0).contains(s))
                .unwrap_or(DEFAULT_RECAPTCHA_MIN_SCORE),
        }
    }

    /// Whether the server can verify tokens
    pub fn is_enabled(&self) -> bool {
        self.secret_key.is_some()
    }
}

impl std::fmt::Debug for RecaptchaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecaptchaConfig")
            .field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
            .field("site_key", &self.site_key)
            .field("verify_url", &self.verify_url)
            .field("min_score", &self.min_score)
            .finish()
    }
}
