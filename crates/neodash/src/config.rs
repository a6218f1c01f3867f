//! Client configuration.

use std::time::Duration;

use crate::request::DEFAULT_PROTOCOL_VERSION;

/// Public Neodash browse service
pub const DEFAULT_BASE_URL: &str = "https://neodashbrowse.francobetancourt.workers.dev";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for a [`NeodashClient`](crate::client::NeodashClient)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Service root; endpoint names are appended to it
    pub base_url: String,
    /// Value of the `ver` field sent with `/authenticate`
    pub protocol_version: String,
    /// Whole-request timeout
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            protocol_version: DEFAULT_PROTOCOL_VERSION.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!(
                "neodash/{} ({})",
                env!("CARGO_PKG_VERSION"),
                std::env::consts::OS
            ),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Full URL for an endpoint name
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint)
    }
}

/// Builder for ClientConfig
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    protocol_version: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ClientConfigBuilder {
    /// Point the client at another service root (e.g. a local mock)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn protocol_version(mut self, version: impl Into<String>) -> Self {
        self.protocol_version = Some(version.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> ClientConfig {
        let default = ClientConfig::default();
        ClientConfig {
            base_url: self.base_url.unwrap_or(default.base_url),
            protocol_version: self.protocol_version.unwrap_or(default.protocol_version),
            timeout: self.timeout.unwrap_or(default.timeout),
            user_agent: self.user_agent.unwrap_or(default.user_agent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.protocol_version, "102a");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("neodash/"));
    }

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::builder()
            .base_url("http://127.0.0.1:8787")
            .protocol_version("103")
            .timeout(Duration::from_secs(5))
            .build();
        assert_eq!(config.base_url, "http://127.0.0.1:8787");
        assert_eq!(config.protocol_version, "103");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, ClientConfig::default().user_agent);
    }

    #[test]
    fn test_endpoint_url_trims_trailing_slash() {
        let config = ClientConfig::builder().base_url("http://mock/").build();
        assert_eq!(config.endpoint_url("authenticate"), "http://mock/authenticate");

        let config = ClientConfig::builder().base_url("http://mock").build();
        assert_eq!(config.endpoint_url("getHallOfFame"), "http://mock/getHallOfFame");
    }
}
