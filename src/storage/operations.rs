//! Storage operations
//!
//! Save, load and list operations confined beneath an app root. Every
//! function expects `app_root` to be canonical.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::storage::filesystem::create_directory;
use crate::storage::pattern::matches_pattern;
use crate::storage::results::{ListResult, SaveResult};
use crate::storage::validation::{SubfolderPath, ensure_confined, validate_file_name};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Resolves `subfolder/file_name` under the app root and checks confinement.
fn resolve_file_path(
    app_root: &Path,
    subfolder: &SubfolderPath,
    file_name: &str,
) -> Result<PathBuf, StoreError> {
    validate_file_name(file_name)?;
    let file_path = subfolder.join_onto(app_root).join(file_name);
    ensure_confined(app_root, &file_path)?;
    Ok(file_path)
}

/// Writes `content` to `subfolder/file_name`, replacing any existing file.
///
/// Missing subfolder directories are created first.
pub fn save_file(
    app_root: &Path,
    subfolder: &SubfolderPath,
    file_name: &str,
    content: &[u8],
) -> Result<SaveResult, StoreError> {
    validate_file_name(file_name)?;

    let folder_path = subfolder.join_onto(app_root);
    ensure_confined(app_root, &folder_path)?;
    create_directory(&folder_path).map_err(|source| StoreError::Io {
        path: folder_path.clone(),
        source,
    })?;

    // Re-check now that the chain exists, in case a segment was a symlink
    let file_path = resolve_file_path(app_root, subfolder, file_name)?;
    fs::write(&file_path, content).map_err(|source| StoreError::Io {
        path: file_path.clone(),
        source,
    })?;

    debug!("Saved {} bytes to {}", content.len(), file_path.display());
    Ok(SaveResult {
        file_path,
        bytes_written: content.len(),
    })
}

/// Reads the raw bytes of `subfolder/file_name`
pub fn load_file(
    app_root: &Path,
    subfolder: &SubfolderPath,
    file_name: &str,
) -> Result<Vec<u8>, StoreError> {
    let file_path = resolve_file_path(app_root, subfolder, file_name)?;
    let content = fs::read(&file_path).map_err(|e| StoreError::io(file_path.clone(), e, false))?;

    debug!("Loaded {} bytes from {}", content.len(), file_path.display());
    Ok(content)
}

/// Reads `subfolder/file_name` as UTF-8 text, dropping a leading byte-order mark.
pub fn load_text_file(
    app_root: &Path,
    subfolder: &SubfolderPath,
    file_name: &str,
) -> Result<String, StoreError> {
    let bytes = load_file(app_root, subfolder, file_name)?;
    let text = String::from_utf8(bytes).map_err(|_| {
        StoreError::InvalidUtf8(subfolder.join_onto(app_root).join(file_name))
    })?;

    match text.strip_prefix(BYTE_ORDER_MARK) {
        Some(stripped) => Ok(stripped.to_string()),
        None => Ok(text),
    }
}

/// Lists the regular files directly inside `subfolder` whose names match `pattern`.
///
/// Subdirectories and symlinks are skipped; the listing is not recursive.
pub fn list_directory(
    app_root: &Path,
    subfolder: &SubfolderPath,
    pattern: &str,
) -> Result<ListResult, StoreError> {
    let directory = subfolder.join_onto(app_root);
    ensure_confined(app_root, &directory)?;

    let entries = fs::read_dir(&directory).map_err(|e| StoreError::io(directory.clone(), e, true))?;

    let mut files = Vec::new();
    for entry in entries.flatten() {
        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        if !is_file {
            continue;
        }
        if matches_pattern(pattern, &entry.file_name().to_string_lossy()) {
            files.push(entry.path());
        }
    }

    debug!(
        "Listed {} ({}) - {} entries",
        directory.display(),
        pattern,
        files.len()
    );

    Ok(ListResult {
        directory,
        entries: files,
    })
}
