use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "info,ember_wallet=debug";

/// Installs a stderr subscriber filtered by `RUST_LOG`.
///
/// Only binaries call this; library code just emits events.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    let installed = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_filter(filter))
        .try_init();

    // A subscriber set up earlier keeps receiving events.
    if let Err(e) = installed {
        debug!(error = %e, "tracing subscriber already installed");
    }
}
