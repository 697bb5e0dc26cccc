//! Logging utilities
//!
//! Provides logging setup for the command-line binary.

use env_logger::Env;

/// Setup logging, defaulting to `info` when `RUST_LOG` is unset.
pub fn setup_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
}
