use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber. `RUST_LOG` controls the filter;
/// defaults to `info` when unset.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}
