use tracing_subscriber::EnvFilter;

/// Installs a stderr fmt subscriber. `RUST_LOG` overrides the `warn` default.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
