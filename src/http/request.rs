use std::time::Duration;

use crate::config::ProbeConfig;
use crate::error::ProbeError;

#[derive(Debug, Clone)]
pub struct RequestInput {
    pub url: reqwest::Url,
    pub timeout: Duration,
}

impl RequestInput {
    pub fn from_config(config: &ProbeConfig) -> Result<Self, ProbeError> {
        config.validate()?;
        let raw = config.url();
        let url = reqwest::Url::parse(&raw)
            .map_err(|e| ProbeError::InvalidTarget(format!("Invalid URL `{raw}`: {e}")))?;

        Ok(Self {
            url,
            timeout: config.timeout,
        })
    }
}
