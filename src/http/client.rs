use std::time::Instant;

use tracing::{debug, warn};

use crate::config::ProbeConfig;
use crate::error::ProbeError;

use super::request::RequestInput;
use super::response::HttpResponse;

/// Build the request for `config` and send it.
pub fn probe(config: &ProbeConfig) -> Result<HttpResponse, ProbeError> {
    let request = RequestInput::from_config(config)?;
    send_request(&request)
}

/// Perform a single blocking GET. Non-2xx statuses are returned, not treated as errors.
pub fn send_request(request: &RequestInput) -> Result<HttpResponse, ProbeError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(request.timeout)
        .build()
        .map_err(|e| {
            warn!(error = %e, "failed to build HTTP client");
            ProbeError::request_failure(&e)
        })?;

    debug!(url = %request.url, timeout_ms = request.timeout.as_millis(), "sending GET");

    let started = Instant::now();
    let response = client.get(request.url.clone()).send().map_err(|e| {
        warn!(url = %request.url, error = %e, "GET failed");
        ProbeError::request_failure(&e)
    })?;

    let status = response.status();
    let bytes = response.bytes().map_err(|e| {
        warn!(url = %request.url, error = %e, "failed to read response body");
        ProbeError::request_failure(&e)
    })?;
    let elapsed = started.elapsed().as_millis();
    let size_bytes = bytes.len();
    let body = String::from_utf8_lossy(&bytes).into_owned();

    Ok(HttpResponse {
        status: status.as_u16(),
        duration_ms: elapsed,
        size_bytes,
        body,
    })
}
