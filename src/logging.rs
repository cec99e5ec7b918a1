// ==========================================
// GreenBit - Logging Setup
// ==========================================
// tracing + tracing-subscriber with env-filter configuration.
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the logging system.
///
/// # Environment
/// - RUST_LOG: filter directive (default: info),
///   e.g. RUST_LOG=debug or RUST_LOG=greenbit=trace
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();
}

/// Logging for tests: verbose, captured by the test harness, and
/// tolerant of repeated initialization across test binaries.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
