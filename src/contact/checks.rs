// ============================================================================
// Local Submission Checks
// ============================================================================
//
// Pure, synchronous checks that need no network. Each returns the rejection
// for the first rule it finds violated.
//
// ============================================================================

use portfolio_config::{MAX_MESSAGE_LEN, MAX_SENDER_LEN, MIN_FILL_MILLIS};

use super::{Rejection, Submission};

/// Spam-indicative phrases. Matched as raw substrings of the lowercased
/// sender and message, so "cryptography" trips "crypto".
pub const DENYLIST: &[&str] = &[
    "viagra",
    "crypto",
    "binary options",
    "seo service",
    "guest post",
    "backlinks",
    "adult",
    "porn",
    "casino",
];

/// Humans never see the honeypot field, so any content means a form-filler bot
pub fn honeypot(submission: &Submission) -> Result<(), Rejection> {
    if submission.honeypot_field.trim().is_empty() {
        Ok(())
    } else {
        Err(Rejection::Honeypot)
    }
}

/// Rejects submissions sent less than [`MIN_FILL_MILLIS`] after the form was
/// rendered. Missing or non-positive timestamps skip the check.
pub fn timing(submission: &Submission, now_ms: i64) -> Result<(), Rejection> {
    match submission.rendered_at {
        Some(started) if started > 0 && now_ms.saturating_sub(started) < MIN_FILL_MILLIS => {
            Err(Rejection::TooFast)
        }
        _ => Ok(()),
    }
}

pub fn content(submission: &Submission) -> Result<(), Rejection> {
    let combined = format!(
        "{}\n{}",
        submission.sender_address, submission.message_body
    )
    .to_lowercase();

    if DENYLIST.iter().any(|phrase| combined.contains(phrase)) {
        Err(Rejection::ContentFlagged)
    } else {
        Ok(())
    }
}

/// Sender and message must be non-empty and within their length limits.
/// Lengths count characters, not bytes.
pub fn fields(submission: &Submission) -> Result<(), Rejection> {
    if !within_limit(&submission.sender_address, MAX_SENDER_LEN) {
        return Err(Rejection::InvalidSender);
    }
    if !within_limit(&submission.message_body, MAX_MESSAGE_LEN) {
        return Err(Rejection::InvalidMessage);
    }
    Ok(())
}

fn within_limit(value: &str, max_len: usize) -> bool {
    !value.is_empty() && value.chars().count() <= max_len
}
