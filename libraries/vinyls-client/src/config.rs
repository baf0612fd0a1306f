//! Compiled-in client configuration.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Backend environment the app is built against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
    Testing,
}

/// Environment selected at build time.
pub const ACTIVE_ENVIRONMENT: Environment = Environment::Development;

const BACKEND_URL: &str = "http://localhost:3000";

/// HTTP client settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Base URL of the backend (e.g. "http://localhost:3000")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Whole-request timeout, covering both reading and writing
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Log response bodies at trace level
    #[serde(default)]
    pub log_bodies: bool,

    /// Image used for collectors without favorite performers; `{id}` is
    /// replaced with the collector id
    #[serde(default = "default_collector_placeholder_image")]
    pub collector_placeholder_image: String,
}

impl ClientConfig {
    /// Config pointing at a specific backend URL, other settings default.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Config for one of the compiled-in environments.
    ///
    /// All three environments currently talk to the same host.
    pub fn for_environment(environment: Environment) -> Self {
        match environment {
            Environment::Development => Self {
                log_bodies: true,
                ..Self::base()
            },
            Environment::Production | Environment::Testing => Self::base(),
        }
    }

    fn base() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_secs: default_timeout_secs(),
            request_timeout_secs: default_timeout_secs(),
            log_bodies: false,
            collector_placeholder_image: default_collector_placeholder_image(),
        }
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate the base URL and return it without trailing slashes.
    pub fn normalized_base_url(&self) -> Result<String, ConfigError> {
        let trimmed = self.base_url.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::InvalidUrl("URL cannot be empty".into()));
        }

        let parsed = url::Url::parse(trimmed)
            .map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", trimmed, e)))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ConfigError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        Ok(trimmed.trim_end_matches('/').to_string())
    }

    /// Placeholder image for a collector.
    pub fn collector_placeholder(&self, collector_id: i64) -> String {
        self.collector_placeholder_image
            .replace("{id}", &collector_id.to_string())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::for_environment(ACTIVE_ENVIRONMENT)
    }
}

fn default_base_url() -> String {
    BACKEND_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_collector_placeholder_image() -> String {
    "https://picsum.photos/seed/collector-{id}/300/300".to_string()
}
