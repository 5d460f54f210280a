use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Diagnostics go to stderr so stdout keeps only the two report lines.
///
/// Priority: RUST_LOG > `--debug` > "warn".
pub fn init(debug: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new(DEFAULT_FILTER)
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "logging initialised");
}
