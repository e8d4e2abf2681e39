mod config;
mod error;
mod http;
mod logging;
mod report;

use tracing::debug;

use config::ProbeConfig;
use http::client::probe;

fn main() {
    logging::init();

    let config = ProbeConfig::default();
    let url = config.url();
    let result = probe(&config);

    if let Ok(response) = &result {
        debug!(
            %url,
            status = response.status,
            duration_ms = response.duration_ms,
            size_bytes = response.size_bytes,
            "probe finished"
        );
    }

    // Failures are reported, never propagated: the exit code is always 0.
    println!("{}", report::render(&url, &result));
}
