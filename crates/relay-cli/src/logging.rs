//! Tracing setup for the `relay` binary.
//!
//! Log level comes from `RUST_LOG` (default: warn); `-v` forces debug.
//! Output goes to stderr so it never mixes with command output.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "debug";

/// Filter for the given verbosity.
pub fn env_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_forces_debug() {
        assert_eq!(env_filter(true).to_string(), "debug");
    }

    #[test]
    fn repeated_init_is_harmless() {
        init(false);
        init(true);
        tracing::debug!("still running");
    }
}
