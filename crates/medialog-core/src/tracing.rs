use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_DIRECTIVE: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Initialize structured stdout tracing. Call once at startup.
/// JSON lines, filtered by `RUST_LOG` (falls back to `info`).
///
/// Safe to call multiple times; later calls are ignored.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().json())
        .try_init();
}

/// Human-readable tracing routed through the libtest output capture.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_test_writer())
        .try_init();
}
