//! Test vectors, integration helpers and benchmarks for the nistecies library
pub mod suites;

use tracing_subscriber::{fmt, EnvFilter};

/// Install a test-friendly `tracing` subscriber
///
/// Honours `RUST_LOG`, defaulting to `info`. Safe to call from every test.
pub fn init_test_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt().with_env_filter(filter).with_test_writer().try_init();
}
