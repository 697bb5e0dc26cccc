//! Storage result types
//!
//! Defines result structures returned by storage operations.

use std::path::PathBuf;

/// Result of a save operation
#[derive(Debug, Clone)]
pub struct SaveResult {
    pub file_path: PathBuf,
    pub bytes_written: usize,
}

/// Result of a directory listing operation
#[derive(Debug, Clone)]
pub struct ListResult {
    pub directory: PathBuf,
    /// Absolute paths, in enumeration order
    pub entries: Vec<PathBuf>,
}
