//! Logging setup.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` wins over `level` when set.
/// With a `log_dir` that exists, output goes to a daily rolling file instead of stderr.
pub fn init_logger(level: &str, log_dir: Option<&Path>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if let Some(dir) = log_dir.filter(|d| d.exists()) {
        let file_appender = tracing_appender::rolling::daily(dir, "restaurant-dash");
        // try_init: a second call (tests, embedding hosts) must not panic
        let _ = subscriber.with_writer(file_appender).with_ansi(false).try_init();
        return;
    }

    let _ = subscriber.try_init();
}
