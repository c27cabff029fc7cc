//! Tracing bootstrap for tests

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialises a test-friendly tracing subscriber once per process.
/// Honors `RUST_LOG`; defaults to warnings so degradation paths
/// (payment-effect failures, ledger fallback) show up in test output.
pub fn init_test_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}
