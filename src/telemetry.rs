use tracing_subscriber::EnvFilter;

/// Installs the global `fmt` subscriber.
///
/// `RUST_LOG` controls verbosity. Without it we log `info` and the per-request
/// spans from `tower_http`.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
