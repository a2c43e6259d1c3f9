//! Client configuration.

use std::fmt;
use std::time::Duration;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.hubapi.com";

/// How requests are authenticated. The two schemes are mutually exclusive.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// Private app / OAuth token, sent as `Authorization: Bearer <token>`.
    Bearer(String),
    /// Legacy API key, appended to every URL as `hapikey=<key>`.
    ApiKey(String),
}

// Keeps secrets out of `{:?}` output.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::Bearer(_) => f.write_str("Bearer(***)"),
            Credential::ApiKey(_) => f.write_str("ApiKey(***)"),
        }
    }
}

/// Configuration for [`HubSpotClient`](crate::HubSpotClient).
///
/// Consumed by the client at construction and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, e.g. `https://api.hubapi.com`
    pub base_url: String,

    pub credential: Credential,

    /// Total request timeout. `None` means calls may block indefinitely.
    pub timeout: Option<Duration>,

    /// User agent string
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, credential: Credential) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            credential,
            timeout: None,
            user_agent: format!("hubspot-client-rust/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Bound every request to `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_trailing_slashes_and_has_no_timeout() {
        let config = ClientConfig::new(
            "https://api.hubapi.com//",
            Credential::Bearer("token".into()),
        );
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.timeout.is_none());
        assert!(config.user_agent.starts_with("hubspot-client-rust/"));
    }

    #[test]
    fn debug_output_hides_secrets() {
        let config = ClientConfig::new(DEFAULT_BASE_URL, Credential::ApiKey("s3cret".into()))
            .with_timeout(Duration::from_secs(5));
        let dbg = format!("{config:?}");
        assert!(!dbg.contains("s3cret"));
        assert!(dbg.contains("ApiKey(***)"));
    }
}
