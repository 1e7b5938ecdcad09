use serde::{Deserialize, Deserializer};

/// Contact form as posted by the browser (form-encoded or JSON).
///
/// Every field is optional on the wire; missing values are screened the same
/// way as empty ones.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactForm {
    pub sender_email: Option<String>,
    pub message: Option<String>,
    /// Honeypot, hidden from humans
    pub company: Option<String>,
    /// Epoch millis at which the form was rendered
    #[serde(deserialize_with = "lenient_string")]
    pub form_start: Option<String>,
    pub recaptcha_token: Option<String>,
}

/// Accepts `"1712345678901"` as well as a bare JSON number
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    }))
}

/// A single contact request, evaluated once and then dropped
#[derive(Debug, Clone, Default)]
pub struct Submission {
    pub sender_address: String,
    pub message_body: String,
    pub honeypot_field: String,
    /// `None` when the timestamp is missing or not a number
    pub rendered_at: Option<i64>,
    pub bot_score_token: Option<String>,
}

impl From<ContactForm> for Submission {
    fn from(form: ContactForm) -> Self {
        Self {
            sender_address: form.sender_email.unwrap_or_default(),
            message_body: form.message.unwrap_or_default(),
            honeypot_field: form.company.unwrap_or_default(),
            rendered_at: form.form_start.as_deref().and_then(parse_leading_int),
            bot_score_token: form.recaptcha_token.filter(|t| !t.is_empty()),
        }
    }
}

/// Parses the integer prefix of `raw`, tolerating leading whitespace, a sign
/// and trailing garbage ("1700000000000ms" -> 1700000000000). Returns `None`
/// when no digit follows. Values past the i64 range saturate.
pub(crate) fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });

    Some(if negative { -magnitude } else { magnitude })
}
