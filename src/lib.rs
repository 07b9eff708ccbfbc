//! Slingshot Blocks
//!
//! Drag a ball back, let go, and knock over a stack of blocks. Physics is
//! handled by rapier2d; this crate drives it and records the ball's path.

pub mod config;
pub mod export;
pub mod sim;

/// Installs the `tracing` subscriber used by both binaries.
/// `RUST_LOG` overrides the default `info` filter.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
