use std::error::Error as StdError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    /// Any fault while performing the GET: connect, DNS, timeout, protocol or body read.
    #[error("{description}")]
    RequestFailure { description: String },

    #[error("Invalid target: {0}")]
    InvalidTarget(String),
}

impl ProbeError {
    pub fn request_failure(err: &(dyn StdError + 'static)) -> Self {
        ProbeError::RequestFailure {
            description: describe(err),
        }
    }
}

/// Join an error's message with its `source()` chain so the root cause stays visible.
fn describe(err: &(dyn StdError + 'static)) -> String {
    let mut parts = vec![err.to_string()];
    let mut source = err.source();
    while let Some(cause) = source {
        let message = cause.to_string();
        if parts.last() != Some(&message) {
            parts.push(message);
        }
        source = cause.source();
    }
    parts.join(": ")
}
