//! Tracing/logging setup shared by binaries and integration tests.

/// Initialize process-wide tracing with the default `info` level and JSON
/// output.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(&tracing::TracingOptions::default());
}

/// Subscriber configuration (filters, output format).
pub mod tracing;

pub use crate::tracing::TracingOptions;
