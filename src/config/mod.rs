//! Probe target.
//!
//! The target is compiled in; `ProbeConfig` only exists as a typed value so the
//! client can be pointed at another address in tests.

use std::time::Duration;

use crate::error::ProbeError;

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 10300;
const DEFAULT_ENDPOINT: &str = "/motion";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    pub host: String,
    pub port: u16,
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ProbeConfig {
    pub fn url(&self) -> String {
        format!("http://{}:{}{}", self.host, self.port, self.endpoint)
    }

    pub fn validate(&self) -> Result<(), ProbeError> {
        if self.host.trim().is_empty() {
            return Err(ProbeError::InvalidTarget("host cannot be empty".to_string()));
        }
        if self.port == 0 {
            return Err(ProbeError::InvalidTarget("port must be between 1 and 65535".to_string()));
        }
        if !self.endpoint.starts_with('/') {
            return Err(ProbeError::InvalidTarget(format!(
                "endpoint must start with `/`: `{}`",
                self.endpoint
            )));
        }
        if self.endpoint.contains(['?', '#']) {
            return Err(ProbeError::InvalidTarget(format!(
                "endpoint cannot carry a query or fragment: `{}`",
                self.endpoint
            )));
        }
        if self.timeout.is_zero() {
            return Err(ProbeError::InvalidTarget("timeout must be non-zero".to_string()));
        }
        Ok(())
    }
}
