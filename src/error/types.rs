//! Error types
//!
//! Defines the construction-time and operation-time error types of the crate.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised while resolving an application identity.
///
/// These are fatal: construction aborts and nothing is returned to operate on.
#[derive(Debug)]
pub enum IdentityError {
    /// `app_name` or `company_name` is not usable as a directory name
    InvalidIdentity {
        parameter: &'static str,
        value: String,
    },
    /// The root directory does not exist or is not a directory
    InvalidRoot(PathBuf),
    /// No root directory was given and the platform data directory is unknown
    NoDefaultRoot,
    /// Creating the company or app directory failed
    ProvisioningFailure {
        step: &'static str,
        path: PathBuf,
        source: io::Error,
    },
}

impl fmt::Display for IdentityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityError::InvalidIdentity { parameter, value } => {
                write!(f, "{} contains invalid characters: {:?}", parameter, value)
            }
            IdentityError::InvalidRoot(p) => {
                write!(f, "Root directory is not a valid path: {}", p.display())
            }
            IdentityError::NoDefaultRoot => {
                write!(f, "Unable to determine the local application data directory")
            }
            IdentityError::ProvisioningFailure { step, path, source } => {
                write!(f, "Unable to create {} {}: {}", step, path.display(), source)
            }
        }
    }
}

impl std::error::Error for IdentityError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IdentityError::ProvisioningFailure { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Rejections produced while parsing a subfolder path or file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    Missing,
    IllegalCharacter { segment: String },
    Traversal { segment: String },
    InvalidFileName(String),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::Missing => write!(f, "Subfolder path is missing"),
            PathError::IllegalCharacter { segment } => {
                write!(f, "Illegal character in path segment: {:?}", segment)
            }
            PathError::Traversal { segment } => {
                write!(f, "Parent directory segment not allowed: {:?}", segment)
            }
            PathError::InvalidFileName(name) => write!(f, "Invalid file name: {:?}", name),
        }
    }
}

impl std::error::Error for PathError {}

/// Storage operation errors
#[derive(Debug)]
pub enum StoreError {
    InvalidPath(PathError),
    Confinement(PathBuf),
    FileNotFound(PathBuf),
    DirectoryNotFound(PathBuf),
    InvalidUtf8(PathBuf),
    Io { path: PathBuf, source: io::Error },
}

impl StoreError {
    /// Wraps an I/O error, mapping "not found" onto the dedicated variants.
    pub(crate) fn io(path: PathBuf, source: io::Error, is_dir: bool) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound if is_dir => StoreError::DirectoryNotFound(path),
            io::ErrorKind::NotFound => StoreError::FileNotFound(path),
            _ => StoreError::Io { path, source },
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::InvalidPath(e) => write!(f, "Invalid path: {}", e),
            StoreError::Confinement(p) => {
                write!(f, "Path resolves outside the app root: {}", p.display())
            }
            StoreError::FileNotFound(p) => write!(f, "File not found: {}", p.display()),
            StoreError::DirectoryNotFound(p) => {
                write!(f, "Directory not found: {}", p.display())
            }
            StoreError::InvalidUtf8(p) => write!(f, "File is not valid UTF-8: {}", p.display()),
            StoreError::Io { path, source } => write!(f, "IO error on {}: {}", path.display(), source),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::InvalidPath(e) => Some(e),
            StoreError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<PathError> for StoreError {
    fn from(error: PathError) -> Self {
        StoreError::InvalidPath(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_not_found_maps_to_specific_variant() {
        let err = StoreError::io(
            PathBuf::from("a.txt"),
            io::Error::new(io::ErrorKind::NotFound, "gone"),
            false,
        );
        assert!(matches!(err, StoreError::FileNotFound(_)));

        let err = StoreError::io(
            PathBuf::from("dir"),
            io::Error::new(io::ErrorKind::NotFound, "gone"),
            true,
        );
        assert!(matches!(err, StoreError::DirectoryNotFound(_)));

        let err = StoreError::io(
            PathBuf::from("a.txt"),
            io::Error::new(io::ErrorKind::PermissionDenied, "nope"),
            false,
        );
        assert!(matches!(err, StoreError::Io { .. }));
    }

    #[test]
    fn test_provisioning_failure_exposes_source() {
        let err = IdentityError::ProvisioningFailure {
            step: "company root folder",
            path: PathBuf::from("/x/Company"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("company root folder"));
    }

    #[test]
    fn test_invalid_identity_names_parameter() {
        let err = IdentityError::InvalidIdentity {
            parameter: "app_name",
            value: "bad\0".into(),
        };
        assert!(err.to_string().starts_with("app_name"));
    }
}
