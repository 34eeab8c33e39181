//! Subscriber initialization.
//!
//! JSON lines with timestamps; the filter comes from `RUST_LOG` first and the
//! caller's default second.

use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` when it parses, else `default_filter`, else
/// `info`.
pub fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new(crate::DEFAULT_FILTER))
}

/// Install the global subscriber.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_a_no_op() {
        init("debug");
        init("warn");
        ::tracing::info!("still logging");
    }

    #[test]
    fn invalid_default_filter_falls_back() {
        // Only meaningful when RUST_LOG is unset; either way this must not panic.
        let _ = env_filter("not a [valid filter");
    }
}
