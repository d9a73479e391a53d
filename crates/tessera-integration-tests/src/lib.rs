//! Integration test crate for the Tessera marketplace workspace.
//!
//! This crate has no library code beyond a logging helper — it only
//! contains integration tests that exercise the full purchase flow across
//! the workspace crates.
//!
//! Run all integration tests:
//! ```sh
//! cargo test -p tessera-integration-tests
//! ```

/// Install a test subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
