//! Tracing Setup
//!
//! Minimal subscriber initialization for binaries and integration harnesses
//! embedding the engine. Library code only emits events; installing a
//! subscriber is the embedder's choice.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a formatted subscriber honoring `RUST_LOG`, defaulting to `info`
/// for this crate. Safe to call once per process; subsequent calls fail
/// quietly.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(concat!(env!("CARGO_PKG_NAME"), "=info")));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
