//! Logging setup utilities for the Balloon server.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber with the specified default log level.
///
/// This function sets up logging for the server library, the shared crate, the
/// HTTP trace layer and the binary itself. The log level can be overridden
/// using the `RUST_LOG` environment variable.
///
/// # Arguments
///
/// * `binary_name` - The name of the binary (e.g., "balloon-server")
/// * `default_log_level` - The default log level (e.g., "debug", "info", "warn", "error")
///
/// # Examples
///
/// ```no_run
/// use balloon_shared::logger::setup_logger;
///
/// setup_logger("balloon-server", "info");
/// ```
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(binary_name, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build the filter directive used when `RUST_LOG` is not set.
fn default_filter(binary_name: &str, default_log_level: &str) -> String {
    format!(
        "{}={level},{}={level},balloon_server={level},tower_http={level}",
        env!("CARGO_PKG_NAME").replace('-', "_"),
        binary_name.replace('-', "_"),
        level = default_log_level,
    )
}
