//! Tracing subscriber setup for the runner.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Level defaults to `info`; override per module with `RUST_LOG`
/// (e.g. `RUST_LOG=signalforge_runner::batch=debug`). Call once at startup;
/// a second call panics in `init`, so tests use their own subscribers.
pub fn setup_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_target(true)
        .with_level(true)
        .compact()
        .with_env_filter(filter)
        .init();
}
