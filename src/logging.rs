//! Diagnostic tracing for the command-line tool.
//!
//! The library only emits `tracing` events; the binary decides whether and
//! where they go. User-facing results are written through
//! [`crate::output::OutputWriter`] and are not affected by `RUST_LOG`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`, defaulting to `warn` when unset or invalid. Output goes
/// to stderr in compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=gcibatch=debug gcibatch all
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // A subscriber may already be installed (e.g. by a test harness)
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
