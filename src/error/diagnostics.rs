//! Failure diagnostics
//!
//! Operation-time failures are reported to a sink injected into the store
//! instead of being propagated to the caller.

use crate::error::types::StoreError;
use log::error;
use std::fmt;

/// The storage operation that produced a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    SaveText,
    LoadText,
    SaveBinary,
    LoadBinary,
    ListDirectory,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::SaveText => "save text file",
            Operation::LoadText => "load text file",
            Operation::SaveBinary => "save binary file",
            Operation::LoadBinary => "load binary file",
            Operation::ListDirectory => "list directory",
        };
        f.write_str(name)
    }
}

/// A single reported failure.
#[derive(Debug)]
pub struct Diagnostic<'a> {
    pub operation: Operation,
    /// File name, subfolder or pattern the caller passed in
    pub target: &'a str,
    pub subfolder: &'a str,
    pub error: &'a StoreError,
}

impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unable to {} (target: {:?}, subfolder: {:?}): {}",
            self.operation, self.target, self.subfolder, self.error
        )
    }
}

/// Receives operation failures. Implementations must not panic or block.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: &Diagnostic<'_>);
}

/// Default sink, forwards every diagnostic to the `log` facade at error level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, diagnostic: &Diagnostic<'_>) {
        error!("{}", diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_diagnostic_message_carries_context() {
        let err = StoreError::FileNotFound(PathBuf::from("/root/App/missing.txt"));
        let diagnostic = Diagnostic {
            operation: Operation::LoadText,
            target: "missing.txt",
            subfolder: "notes",
            error: &err,
        };
        let message = diagnostic.to_string();
        assert!(message.starts_with("Unable to load text file"));
        assert!(message.contains("missing.txt"));
        assert!(message.contains("notes"));
    }

    #[test]
    fn test_log_sink_does_not_panic_without_logger() {
        let err = StoreError::Confinement(PathBuf::from("/elsewhere"));
        LogSink.report(&Diagnostic {
            operation: Operation::ListDirectory,
            target: "*",
            subfolder: "",
            error: &err,
        });
    }
}
