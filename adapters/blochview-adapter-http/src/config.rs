//! Simulator client configuration.

use std::time::Duration;

use crate::error::{HttpError, HttpResult};

/// Default simulator endpoint.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Environment variable overriding the simulator endpoint.
pub const SIMULATOR_URL_ENV: &str = "BLOCHVIEW_SIMULATOR_URL";

/// Environment variable overriding the request timeout, in seconds.
pub const TIMEOUT_ENV: &str = "BLOCHVIEW_TIMEOUT_SECS";

/// Where and how to reach the simulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// Base URL without the `/simulate` path.
    pub base_url: String,
    /// Whole-request timeout.
    pub timeout: Duration,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            base_url: std::env::var(SIMULATOR_URL_ENV)
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            timeout: std::env::var(TIMEOUT_ENV)
                .ok()
                .and_then(|s| s.parse().ok())
                .map_or(Duration::from_secs(60), Duration::from_secs),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl SimulatorConfig {
    /// Default timeouts against an explicit endpoint.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Set the whole-request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check the endpoint is an absolute http(s) URL.
    pub fn validate(&self) -> HttpResult<()> {
        let url = self.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(HttpError::InvalidConfig(format!(
                "simulator URL must start with http:// or https://, got '{url}'"
            )));
        }
        if self.timeout.is_zero() {
            return Err(HttpError::InvalidConfig("timeout must be non-zero".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_scheme() {
        assert!(SimulatorConfig::with_base_url("http://localhost:8000").validate().is_ok());
        assert!(SimulatorConfig::with_base_url("https://sim.example").validate().is_ok());
        assert!(matches!(
            SimulatorConfig::with_base_url("localhost:8000").validate(),
            Err(HttpError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let cfg = SimulatorConfig::with_base_url(DEFAULT_BASE_URL).timeout(Duration::ZERO);
        assert!(cfg.validate().is_err());
    }
}
