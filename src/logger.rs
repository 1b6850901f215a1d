//! stderr logging for the `monkey` binary.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry};

/// Maps the `-v` count to a level: none warns only, `-v` debug, `-vv` trace.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs the global subscriber as `LEVEL message` lines on stderr.
/// A second call is a no-op.
pub fn init(verbosity: u8) {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_level(true)
        .with_ansi(false)
        .compact()
        .with_filter(level_for(verbosity));

    let _ = Registry::default().with(layer).try_init();
}
