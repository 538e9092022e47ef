//! Client configuration.

use serde::{Deserialize, Serialize};

/// Official VIES REST endpoint.
pub const VIES_URL: &str = "https://ec.europa.eu/taxation_customs/vies/rest-api";

/// Settings for [`ViesClient`](super::ViesClient).
///
/// Every field has a default, so the struct can be embedded in an
/// application's config file with only the fields that differ:
///
/// ```
/// use euvat::vies::ViesConfig;
///
/// let config: ViesConfig = serde_json::from_str(r#"{"timeout_secs": 5}"#).unwrap();
/// assert_eq!(config.timeout_secs, 5);
/// assert_eq!(config.max_retries, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViesConfig {
    /// REST base URL without trailing slash.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Retries after a transport failure. HTTP and API errors are never retried.
    pub max_retries: u32,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for ViesConfig {
    fn default() -> Self {
        Self {
            base_url: VIES_URL.into(),
            timeout_secs: 30,
            max_retries: 2,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}

impl ViesConfig {
    /// Point the client at another endpoint (a mock server, or a proxy).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }
}
