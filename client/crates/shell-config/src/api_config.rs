use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_API_BASE_URL, DEFAULT_SIGN_IN_ROUTE,
    DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS, MIN_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Configuration for the REST backend the client talks to
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL every request path is appended to
    pub base_url: String,
    /// Ceiling applied uniformly to every request
    pub timeout_secs: u64,
    /// Route the application is sent to when the backend rejects the token
    pub sign_in_route: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_API_BASE_URL),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            sign_in_route: String::from(DEFAULT_SIGN_IN_ROUTE),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// True when the base URL is still the development default.
    pub fn is_default_base_url(&self) -> bool {
        self.base_url == DEFAULT_API_BASE_URL
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::api(format!(
                "api.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if self.timeout_secs < MIN_TIMEOUT_SECS || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::api(format!(
                "api.timeout_secs must be {}-{}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        if !self.sign_in_route.starts_with('/') {
            return Err(ConfigError::api(format!(
                "api.sign_in_route must start with '/', got '{}'",
                self.sign_in_route
            )));
        }

        Ok(())
    }
}
