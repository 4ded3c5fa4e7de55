use tracing_subscriber::EnvFilter;

/// Routes library events to the test harness. Filter with `RUST_LOG`, e.g.
/// `RUST_LOG=geokern=trace`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
