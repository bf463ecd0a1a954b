use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "REPOFOLIO_LOG";

/// Install the stderr log subscriber.
///
/// The filter comes from `REPOFOLIO_LOG` (e.g. `repofolio=debug`); without
/// it only warnings and errors from this crate are shown. Calling this twice
/// is harmless: the second subscriber is simply not installed.
pub fn init_logging(default_level: Level) {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("repofolio={default_level}")));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(env_filter)
        .try_init();
}
