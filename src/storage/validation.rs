//! Path validation
//!
//! Parses caller-supplied subfolder paths and file names, and checks that
//! resolved targets stay inside the app root.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{PathError, StoreError};
use crate::storage::filesystem::canonical_existing_ancestor;
use crate::utils::validation::{contains_invalid_chars, is_valid_entry_name};

/// A validated relative path below the app root.
///
/// Either separator is accepted. Empty and `.` segments are dropped, so
/// `"/a//b/"` and `"a\\.\\b"` both become `a/b`. An empty path denotes the
/// app root itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubfolderPath {
    segments: Vec<String>,
}

impl SubfolderPath {
    /// The app root itself
    pub fn root() -> Self {
        Self::default()
    }

    pub fn parse(raw: &str) -> Result<Self, PathError> {
        let mut segments = Vec::new();
        for segment in raw.split(['/', '\\']) {
            match segment {
                "" | "." => continue,
                ".." => {
                    return Err(PathError::Traversal {
                        segment: segment.to_string(),
                    });
                }
                s if contains_invalid_chars(s) => {
                    return Err(PathError::IllegalCharacter {
                        segment: s.to_string(),
                    });
                }
                s => segments.push(s.to_string()),
            }
        }
        Ok(Self { segments })
    }

    /// Like [`parse`](Self::parse), but an absent path is rejected rather
    /// than treated as empty.
    pub fn parse_optional(raw: Option<&str>) -> Result<Self, PathError> {
        match raw {
            Some(raw) => Self::parse(raw),
            None => Err(PathError::Missing),
        }
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Joins the segments onto `base` using the platform separator.
    pub fn join_onto(&self, base: &Path) -> PathBuf {
        let mut path = base.to_path_buf();
        path.extend(&self.segments);
        path
    }
}

impl fmt::Display for SubfolderPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

impl std::str::FromStr for SubfolderPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A file name must address a single entry in its directory
pub fn validate_file_name(file_name: &str) -> Result<(), PathError> {
    if is_valid_entry_name(file_name) {
        Ok(())
    } else {
        Err(PathError::InvalidFileName(file_name.to_string()))
    }
}

/// Verifies that `target` lies within `app_root` after resolving symlinks.
///
/// `target` may not exist yet; its nearest existing ancestor is checked
/// instead. `app_root` must already be canonical.
pub fn ensure_confined(app_root: &Path, target: &Path) -> Result<(), StoreError> {
    if !target.starts_with(app_root) {
        return Err(StoreError::Confinement(target.to_path_buf()));
    }

    match canonical_existing_ancestor(target) {
        Some(canonical) if canonical.starts_with(app_root) => Ok(()),
        _ => Err(StoreError::Confinement(target.to_path_buf())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_is_root() {
        let path = SubfolderPath::parse("").unwrap();
        assert!(path.is_root());
        assert_eq!(path, SubfolderPath::root());
    }

    #[test]
    fn test_mixed_separators_and_empty_segments() {
        let path = SubfolderPath::parse("/path\\to//subfolder/").unwrap();
        assert_eq!(path.segments(), ["path", "to", "subfolder"]);
        assert_eq!(path.to_string(), "path/to/subfolder");
    }

    #[test]
    fn test_current_dir_segments_are_dropped() {
        let path = SubfolderPath::parse("./a/./b").unwrap();
        assert_eq!(path.segments(), ["a", "b"]);
    }

    #[test]
    fn test_parent_segments_are_rejected() {
        assert_eq!(
            SubfolderPath::parse("../../etc"),
            Err(PathError::Traversal {
                segment: "..".into()
            })
        );
        assert!(SubfolderPath::parse("a/b/..").is_err());
        assert!(SubfolderPath::parse("a\\..\\b").is_err());
        // Only an exact ".." segment is a parent reference
        assert!(SubfolderPath::parse("a/..b/c..").is_ok());
    }

    #[test]
    fn test_illegal_characters_are_rejected() {
        assert_eq!(
            SubfolderPath::parse("ok/bad\0seg"),
            Err(PathError::IllegalCharacter {
                segment: "bad\0seg".into()
            })
        );
    }

    #[test]
    fn test_absent_is_distinct_from_empty() {
        assert_eq!(SubfolderPath::parse_optional(None), Err(PathError::Missing));
        assert!(SubfolderPath::parse_optional(Some("")).unwrap().is_root());
    }

    #[test]
    fn test_file_names() {
        assert!(validate_file_name("Test.txt").is_ok());
        assert!(validate_file_name("").is_err());
        assert!(validate_file_name("..").is_err());
        assert!(validate_file_name("../escape.txt").is_err());
        assert!(validate_file_name("sub\\file.txt").is_err());
    }

    #[test]
    fn test_confinement_accepts_missing_children() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();
        let target = root.join("not").join("yet").join("file.txt");

        assert!(ensure_confined(&root, &target).is_ok());
        assert!(ensure_confined(&root, &root).is_ok());
    }

    #[test]
    fn test_confinement_rejects_outside_paths() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap().join("app");
        std::fs::create_dir(&root).unwrap();

        let outside = root.parent().unwrap().join("other.txt");
        assert!(matches!(
            ensure_confined(&root, &outside),
            Err(StoreError::Confinement(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_confinement_rejects_symlink_escape() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().canonicalize().unwrap();
        let root = base.join("app");
        let outside = base.join("outside");
        std::fs::create_dir(&root).unwrap();
        std::fs::create_dir(&outside).unwrap();
        std::os::unix::fs::symlink(&outside, root.join("link")).unwrap();

        let target = root.join("link").join("file.txt");
        assert!(matches!(
            ensure_confined(&root, &target),
            Err(StoreError::Confinement(_))
        ));
    }
}
