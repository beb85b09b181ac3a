//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Subscriber options, usually taken from the application config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingOptions {
    /// Default filter directive; `RUST_LOG` wins when set.
    pub level: String,
    /// JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for TracingOptions {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: true,
        }
    }
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber.
///
/// Returns `false` if a subscriber was already installed.
pub fn init(options: &TracingOptions) -> bool {
    let filter = env_filter(&options.level);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let installed = if options.json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    };

    if installed {
        ::tracing::debug!(level = %options.level, json = options.json, "tracing initialized");
    }
    installed
}
