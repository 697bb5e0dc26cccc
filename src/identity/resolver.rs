//! Identity resolution
//!
//! Validates the (app, company, root) triple and provisions the
//! `root/company/app` directory tree.

use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::error::IdentityError;
use crate::storage::filesystem::{create_directory, directory_exists};
use crate::utils::validation::is_valid_entry_name;

/// The identity an application's files are stored under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppIdentity {
    pub app_name: String,
    pub company_name: String,
    /// Empty means the platform's local application data directory
    pub root_dir: PathBuf,
}

impl AppIdentity {
    pub fn new(
        app_name: impl Into<String>,
        company_name: impl Into<String>,
        root_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            company_name: company_name.into(),
            root_dir: root_dir.into(),
        }
    }

    /// Checks both names without touching the filesystem.
    pub fn validate(&self) -> Result<(), IdentityError> {
        validate_name("app_name", &self.app_name)?;
        validate_name("company_name", &self.company_name)
    }
}

fn validate_name(parameter: &'static str, value: &str) -> Result<(), IdentityError> {
    if is_valid_entry_name(value) {
        Ok(())
    } else {
        Err(IdentityError::InvalidIdentity {
            parameter,
            value: value.to_string(),
        })
    }
}

/// Returns the user-local application data directory for this platform.
pub fn default_root() -> Result<PathBuf, IdentityError> {
    directories::BaseDirs::new()
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .ok_or(IdentityError::NoDefaultRoot)
}

/// Validates `identity` and makes sure its app root exists on disk.
///
/// Nothing is created unless every input is valid. Re-resolving the same
/// identity finds the directories already present and succeeds.
pub fn resolve(identity: &AppIdentity) -> Result<PathBuf, IdentityError> {
    identity.validate()?;

    let root_dir = if identity.root_dir.as_os_str().is_empty() {
        default_root()?
    } else {
        identity.root_dir.clone()
    };

    if !directory_exists(&root_dir) {
        return Err(IdentityError::InvalidRoot(root_dir));
    }

    let root_dir = root_dir
        .canonicalize()
        .map_err(|_| IdentityError::InvalidRoot(root_dir.clone()))?;

    let company_root = provision(&root_dir, &identity.company_name, "company root folder")?;
    let app_root = provision(&company_root, &identity.app_name, "app root folder")?;

    let app_root = app_root
        .canonicalize()
        .map_err(|source| IdentityError::ProvisioningFailure {
            step: "app root folder",
            path: app_root.clone(),
            source,
        })?;

    info!("App root resolved to {}", app_root.display());
    Ok(app_root)
}

fn provision(parent: &Path, name: &str, step: &'static str) -> Result<PathBuf, IdentityError> {
    let path = parent.join(name);
    if directory_exists(&path) {
        debug!("Using existing {} {}", step, path.display());
        return Ok(path);
    }

    create_directory(&path).map_err(|source| IdentityError::ProvisioningFailure {
        step,
        path: path.clone(),
        source,
    })?;
    info!("Created {} {}", step, path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_creates_company_and_app_levels() {
        let temp = TempDir::new().unwrap();
        let identity = AppIdentity::new("Test Product 1", "Test Company 1", temp.path());

        let app_root = resolve(&identity).unwrap();

        assert!(app_root.is_dir());
        assert!(app_root.ends_with("Test Company 1/Test Product 1"));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let identity = AppIdentity::new("App", "Company", temp.path());

        let first = resolve(&identity).unwrap();
        let second = resolve(&identity).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_names_create_nothing() {
        let temp = TempDir::new().unwrap();

        let err = resolve(&AppIdentity::new("App\0", "Company", temp.path())).unwrap_err();
        assert!(matches!(
            err,
            IdentityError::InvalidIdentity { parameter: "app_name", .. }
        ));

        let err = resolve(&AppIdentity::new("App", "Com/pany", temp.path())).unwrap_err();
        assert!(matches!(
            err,
            IdentityError::InvalidIdentity { parameter: "company_name", .. }
        ));

        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_dot_names_are_rejected() {
        let temp = TempDir::new().unwrap();
        for name in ["", ".", ".."] {
            let err = resolve(&AppIdentity::new(name, "Company", temp.path())).unwrap_err();
            assert!(matches!(err, IdentityError::InvalidIdentity { .. }));
        }
    }

    #[test]
    fn test_missing_root_is_not_created() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("does-not-exist");

        let err = resolve(&AppIdentity::new("App", "Company", &missing)).unwrap_err();

        assert!(matches!(err, IdentityError::InvalidRoot(_)));
        assert!(!missing.exists());
    }

    #[test]
    fn test_file_as_root_is_invalid() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("plain.txt");
        std::fs::write(&file, "x").unwrap();

        let err = resolve(&AppIdentity::new("App", "Company", &file)).unwrap_err();
        assert!(matches!(err, IdentityError::InvalidRoot(_)));
    }

    #[test]
    fn test_blocked_company_level_is_provisioning_failure() {
        let temp = TempDir::new().unwrap();
        // A regular file where the company directory should go
        std::fs::write(temp.path().join("Company"), "x").unwrap();

        let err = resolve(&AppIdentity::new("App", "Company", temp.path())).unwrap_err();
        assert!(matches!(
            err,
            IdentityError::ProvisioningFailure { step: "company root folder", .. }
        ));
    }
}
