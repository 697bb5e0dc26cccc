//! File system operations
//!
//! Thin wrappers over `std::fs` shared by the identity resolver and the store.

use std::fs;
use std::io::Result;
use std::path::{Path, PathBuf};

/// Create a directory and any missing parents
pub fn create_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
}

/// Check if directory exists
pub fn directory_exists(path: &Path) -> bool {
    path.is_dir()
}

/// Canonicalizes the nearest ancestor of `path` that exists on disk.
///
/// A symlink counts as existing even when its target does not, so a dangling
/// link yields `None` instead of falling through to its parent. Returns `None`
/// when no ancestor exists or canonicalization fails.
pub fn canonical_existing_ancestor(path: &Path) -> Option<PathBuf> {
    path.ancestors()
        .find(|ancestor| fs::symlink_metadata(ancestor).is_ok())
        .and_then(|ancestor| ancestor.canonicalize().ok())
}
