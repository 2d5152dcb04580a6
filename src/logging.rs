//! Tracing subscriber setup for the binary.

use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparseable.
pub const DEFAULT_FILTER: &str = "robird=info";

/// Build the filter from `directives`, falling back to [`DEFAULT_FILTER`].
pub fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a fmt subscriber writing to stderr, filtered by `RUST_LOG`.
///
/// Fails if a global subscriber is already set.
pub fn init() -> Result<(), TryInitError> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish()
        .try_init()
}
