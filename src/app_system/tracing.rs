use tracing_subscriber::EnvFilter;

/// Configures the global tracing subscriber once for the entire application.
///
/// Honors `RUST_LOG`; defaults to `info`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();
}
