//! Tracing/logging setup for applications built on the shared kernel.
//!
//! The kernel crates only emit `tracing` events; installing a subscriber is
//! the application's call, typically once at startup.

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with(&TracingConfig::from_env());
}

/// Subscriber configuration and initialization.
pub mod tracing;

pub use crate::tracing::{LogFormat, TracingConfig, init_with};
