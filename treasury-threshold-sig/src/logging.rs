//! Tracing subscriber setup for binaries and tests.

use tracing_subscriber::{fmt, EnvFilter};

/// Installs a global subscriber filtered by `filter`, or by `RUST_LOG` when
/// no filter is given, falling back to `info`.
///
/// Calling it again after a subscriber is installed does nothing.
pub fn init_tracing(filter: Option<&str>) {
    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let subscriber = fmt().with_env_filter(filter).with_target(false).finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::trace!("global subscriber already installed");
    }
}
