use tracing::Subscriber;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;

const MAX_LEVEL: LevelFilter = LevelFilter::WARN;

/// Install the global fmt subscriber. Logs go to stderr so stdout only carries the report line.
pub fn init() {
    subscriber(std::io::stderr).init();
}

fn subscriber<W>(writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_max_level(MAX_LEVEL)
        .finish()
}
