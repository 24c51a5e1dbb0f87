//! Tracing subscriber setup.
//!
//! Events go to stderr so they never interleave with the board drawn on
//! stdout. `RUST_LOG` takes precedence over the default directive.

use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset or invalid
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Resolve the filter: `RUST_LOG` first, then `default_directive`
pub fn resolve_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Install the global subscriber
pub fn init_logging(default_directive: &str) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(resolve_filter(default_directive))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
}
