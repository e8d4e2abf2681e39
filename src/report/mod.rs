use crate::error::ProbeError;
use crate::http::response::HttpResponse;

/// Render the single stdout line for a probe outcome.
pub fn render(url: &str, result: &Result<HttpResponse, ProbeError>) -> String {
    match result {
        Ok(response) => format!(
            "GET {url} status: {}, response: {}",
            response.status, response.body
        ),
        Err(err) => format!("Error making GET request: {err}"),
    }
}
