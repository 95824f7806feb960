//! Tracing setup for hosts embedding the storefront.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a `fmt` subscriber filtered by `RUST_LOG` (default `info`).
///
/// Later calls are no-ops.
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
