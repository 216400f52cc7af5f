//! Tracing initialization.

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global tracing subscriber.
///
/// Filter comes from `RUST_LOG` (default `info`). Safe to call more than
/// once; subsequent calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}
