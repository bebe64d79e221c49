//! Tracing initialisation for test binaries.
//!
//! Installs a global `tracing` subscriber once per process so stress tests
//! can emit structured events. The log level is controlled via `RUST_LOG`
//! and defaults to `info`; output goes to `stderr` to stay out of test
//! harness capture on `stdout`.

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Installs the test subscriber if no global subscriber exists yet.
///
/// Safe to call from every test; only the first call in the process has any
/// effect, and a subscriber installed elsewhere is left in place.
pub fn init_test_tracing() {
    INITIALISED.get_or_init(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
