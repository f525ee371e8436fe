//! Dashboard configuration.
//!
//! The only required setting is the backend base URL. Everything else has
//! a default matching what the backend expects.

use std::time::Duration;

use crate::models::Platform;

/// Default backend when `BACKEND_URL` is unset.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";

/// Delay between an automation trigger and the stats refresh it schedules.
pub const AUTOMATION_REFRESH_DELAY: Duration = Duration::from_secs(10);

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const DEFAULT_CHANNEL_KEY: &str = "main";

pub const DEFAULT_PUBLISH_DELAY_SECS: u64 = 10;

pub const ENV_BACKEND_URL: &str = "BACKEND_URL";
pub const ENV_REQUEST_TIMEOUT: &str = "TRENDBOARD_REQUEST_TIMEOUT_SECS";
pub const ENV_LOG_FILTER: &str = "TRENDBOARD_LOG";

/// Runtime configuration for the dashboard.
///
/// ```ignore
/// use trendboard::startup::DashboardConfig;
///
/// let config = DashboardConfig::from_env()
///     .with_backend_url("http://10.0.0.5:8001");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Backend origin, without the `/api` suffix
    pub backend_url: String,
    /// Per-request timeout; `None` lets a hung request wait forever
    pub request_timeout: Option<Duration>,
    pub automation_refresh_delay: Duration,
    /// Channel key sent with every Telegram publish
    pub channel_key: String,
    /// Seconds the backend waits between posts
    pub publish_delay_seconds: u64,
    /// Platforms toggled on when the composer starts
    pub default_platforms: Vec<Platform>,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout: Some(DEFAULT_REQUEST_TIMEOUT),
            automation_refresh_delay: AUTOMATION_REFRESH_DELAY,
            channel_key: DEFAULT_CHANNEL_KEY.to_string(),
            publish_delay_seconds: DEFAULT_PUBLISH_DELAY_SECS,
            default_platforms: vec![Platform::Telegram],
            log_filter: "info".to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend URL. A trailing slash is dropped.
    pub fn with_backend_url(mut self, url: impl Into<String>) -> Self {
        self.backend_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_automation_refresh_delay(mut self, delay: Duration) -> Self {
        self.automation_refresh_delay = delay;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Base for every endpoint: `{backend_url}/api`.
    pub fn api_base(&self) -> String {
        format!("{}/api", self.backend_url)
    }

    /// Build the config from environment variables.
    ///
    /// - `BACKEND_URL`: backend origin
    /// - `TRENDBOARD_REQUEST_TIMEOUT_SECS`: request timeout, `0` disables it
    /// - `TRENDBOARD_LOG`: log filter directive
    ///
    /// Unparseable values are ignored with a warning.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var(ENV_BACKEND_URL) {
            if !url.trim().is_empty() {
                config = config.with_backend_url(url.trim());
            }
        }

        if let Ok(raw) = std::env::var(ENV_REQUEST_TIMEOUT) {
            match raw.trim().parse::<u64>() {
                Ok(0) => config = config.with_request_timeout(None),
                Ok(secs) => config = config.with_request_timeout(Some(Duration::from_secs(secs))),
                Err(_) => tracing::warn!("Ignoring invalid {}={:?}", ENV_REQUEST_TIMEOUT, raw),
            }
        }

        if let Ok(filter) = std::env::var(ENV_LOG_FILTER) {
            if !filter.trim().is_empty() {
                config = config.with_log_filter(filter.trim());
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var(ENV_BACKEND_URL);
        std::env::remove_var(ENV_REQUEST_TIMEOUT);
        std::env::remove_var(ENV_LOG_FILTER);
    }

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.automation_refresh_delay, Duration::from_secs(10));
        assert_eq!(config.channel_key, "main");
        assert_eq!(config.publish_delay_seconds, 10);
        assert_eq!(config.default_platforms, vec![Platform::Telegram]);
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let config = DashboardConfig::new().with_backend_url("http://example.com:9000/");
        assert_eq!(config.backend_url, "http://example.com:9000");
        assert_eq!(config.api_base(), "http://example.com:9000/api");
    }

    #[test]
    #[serial]
    fn test_from_env_reads_variables() {
        clear_env();
        std::env::set_var(ENV_BACKEND_URL, "https://trends.example.org/");
        std::env::set_var(ENV_REQUEST_TIMEOUT, "5");
        std::env::set_var(ENV_LOG_FILTER, "trendboard=debug");

        let config = DashboardConfig::from_env();
        assert_eq!(config.backend_url, "https://trends.example.org");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.log_filter, "trendboard=debug");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_zero_timeout_disables() {
        clear_env();
        std::env::set_var(ENV_REQUEST_TIMEOUT, "0");
        assert_eq!(DashboardConfig::from_env().request_timeout, None);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_garbage() {
        clear_env();
        std::env::set_var(ENV_REQUEST_TIMEOUT, "soon");
        std::env::set_var(ENV_BACKEND_URL, "   ");

        let config = DashboardConfig::from_env();
        assert_eq!(config.request_timeout, Some(DEFAULT_REQUEST_TIMEOUT));
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        clear_env();
    }
}
