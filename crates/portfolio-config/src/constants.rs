// ============================================================================
// Configuration Constants
// ============================================================================

// Server
pub(crate) const DEFAULT_PORT: u16 = 3000;
pub(crate) const DEFAULT_BIND_HOST: &str = "0.0.0.0";
pub(crate) const DEFAULT_RUST_LOG: &str = "info";

// Outbound HTTP (reCAPTCHA + Resend)
pub(crate) const DEFAULT_OUTBOUND_TIMEOUT_SECS: u64 = 5;

// Resend
pub(crate) const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com";
pub(crate) const DEFAULT_CONTACT_FROM: &str = "Contact Form <onboarding@resend.dev>";
pub(crate) const DEFAULT_CONTACT_TO: &str = "danysalgueiro80@gmail.com";
pub(crate) const DEFAULT_CONTACT_SUBJECT: &str = "Message from contact form";

// reCAPTCHA v3
pub(crate) const DEFAULT_RECAPTCHA_VERIFY_URL: &str =
    "https://www.google.com/recaptcha/api/siteverify";
pub(crate) const DEFAULT_RECAPTCHA_MIN_SCORE: f64 = 0.5;

/// Action name the browser passes to `grecaptcha.execute`
pub const RECAPTCHA_ACTION: &str = "contact_submit";

// Contact form limits
pub const MAX_SENDER_LEN: usize = 500;
pub const MAX_MESSAGE_LEN: usize = 5000;
pub const MIN_FILL_MILLIS: i64 = 3000;

/// Worst-case wire size of one character: a 4-byte UTF-8 scalar is 12 bytes
/// percent-encoded (`%F0%9F%98%80`) and 12 bytes as a JSON surrogate pair.
const MAX_ENCODED_CHAR_LEN: usize = 12;

/// Room for field names, the honeypot, `formStart` and the reCAPTCHA token
const FORM_OVERHEAD: usize = 16 * 1024;

/// Request body limit for the HTTP API. Any form whose fields are within
/// [`MAX_SENDER_LEN`] and [`MAX_MESSAGE_LEN`] must reach the pipeline.
pub const MAX_REQUEST_BODY_SIZE: usize =
    (MAX_SENDER_LEN + MAX_MESSAGE_LEN) * MAX_ENCODED_CHAR_LEN + FORM_OVERHEAD;
