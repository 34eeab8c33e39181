//! Tracing/logging setup shared by the console binary and tests.

/// Default filter when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Initialize process-wide tracing with [`DEFAULT_FILTER`].
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(DEFAULT_FILTER);
}

/// Initialize process-wide tracing, falling back to `default_filter` when
/// `RUST_LOG` is unset or invalid.
pub fn init_with(default_filter: &str) {
    tracing::init(default_filter);
}

/// Subscriber configuration (filters, layers).
pub mod tracing;
