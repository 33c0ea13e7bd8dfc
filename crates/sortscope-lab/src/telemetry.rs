//! Logging setup.
//!
//! Events go to stderr so that tables and sorted output on stdout stay clean.
//! The filter comes from `RUST_LOG` and falls back to [`DEFAULT_FILTER`].

// External dependencies
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "sortscope=info,sortscope_lab=info";

/// Install the global subscriber; later calls are ignored.
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
