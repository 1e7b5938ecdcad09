// ============================================================================
// Logging Configuration
// ============================================================================

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    /// `RUST_LOG`-style filter directive
    pub filter: String,
    /// Salt for hashing sender addresses before they reach the logs.
    /// Random per process when `LOG_HASH_SALT` is unset.
    pub hash_salt: String,
}

impl LoggingConfig {
    pub(crate) fn from_lookup(get: &impl Fn(&str) -> Option<String>) -> Self {
        Self {
            filter: get("RUST_LOG")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| crate::constants::DEFAULT_RUST_LOG.to_string()),
            hash_salt: get("LOG_HASH_SALT")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
        }
    }
}
