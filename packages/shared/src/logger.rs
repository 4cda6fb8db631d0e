//! Tracing subscriber setup shared by the server and client binaries.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise the given binary name is
/// used as the default filter target at `default_level`.
pub fn setup_logger(bin_name: &str, default_level: &str) {
    // Cargo binary names use dashes, tracing targets use underscores.
    let target = bin_name.replace('-', "_");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("{target}={default_level},tower_http={default_level}"))
    });

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
