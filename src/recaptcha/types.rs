use serde::{Deserialize, Serialize};

/// Reply of the siteverify endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteVerifyResponse {
    pub success: bool,
    /// 0.0 (bot) ..= 1.0 (human). Absent for score-less (v2) keys.
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default, rename = "error-codes")]
    pub error_codes: Vec<String>,
}

impl SiteVerifyResponse {
    /// A reply passes when the service reports success and the score, if
    /// any, is at least `min_score`
    pub fn passes(&self, min_score: f64) -> bool {
        self.success && self.score.is_none_or(|score| score >= min_score)
    }
}
