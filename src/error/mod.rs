//! Error handling
//!
//! Defines error types and the diagnostics sink used for non-fatal failures.

pub mod diagnostics;
pub mod types;

pub use diagnostics::{Diagnostic, DiagnosticSink, LogSink, Operation};
pub use types::*;
