//! Scoped store
//!
//! [`AppFiles`] fixes an app root at construction and exposes save, load and
//! list operations beneath it in two flavours: `try_*` methods returning
//! `Result`, and plain methods that report failures to the diagnostics sink
//! and return an empty default.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{Diagnostic, DiagnosticSink, IdentityError, LogSink, Operation, StoreError};
use crate::identity::{AppIdentity, resolve};
use crate::storage::operations;
use crate::storage::results::{ListResult, SaveResult};
use crate::storage::validation::SubfolderPath;

/// Per-application file storage rooted at `root/company/app`.
#[derive(Clone)]
pub struct AppFiles {
    app_root: PathBuf,
    sink: Arc<dyn DiagnosticSink>,
}

impl fmt::Debug for AppFiles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppFiles")
            .field("app_root", &self.app_root)
            .finish_non_exhaustive()
    }
}

impl AppFiles {
    /// Validates the identity and provisions its directory tree.
    ///
    /// An empty `root_dir` selects the platform's local application data
    /// directory. Failures are reported through `log`.
    pub fn new(
        app_name: &str,
        company_name: &str,
        root_dir: impl AsRef<Path>,
    ) -> Result<Self, IdentityError> {
        Self::from_identity(&AppIdentity::new(
            app_name,
            company_name,
            root_dir.as_ref(),
        ))
    }

    pub fn from_identity(identity: &AppIdentity) -> Result<Self, IdentityError> {
        let app_root = resolve(identity)?;
        Ok(Self {
            app_root,
            sink: Arc::new(LogSink),
        })
    }

    /// Replaces the sink that receives operation failures
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Absolute path of the app root directory
    pub fn app_root_path(&self) -> &Path {
        &self.app_root
    }

    pub fn try_save_text(
        &self,
        file_name: &str,
        content: &str,
        subfolder: &str,
    ) -> Result<SaveResult, StoreError> {
        let subfolder = SubfolderPath::parse(subfolder)?;
        operations::save_file(&self.app_root, &subfolder, file_name, content.as_bytes())
    }

    /// Returns `FileNotFound` for a missing file, unlike [`load_text`](Self::load_text).
    pub fn try_load_text(&self, file_name: &str, subfolder: &str) -> Result<String, StoreError> {
        let subfolder = SubfolderPath::parse(subfolder)?;
        operations::load_text_file(&self.app_root, &subfolder, file_name)
    }

    pub fn try_save_binary(
        &self,
        file_name: &str,
        content: &[u8],
        subfolder: &str,
    ) -> Result<SaveResult, StoreError> {
        let subfolder = SubfolderPath::parse(subfolder)?;
        operations::save_file(&self.app_root, &subfolder, file_name, content)
    }

    pub fn try_load_binary(&self, file_name: &str, subfolder: &str) -> Result<Vec<u8>, StoreError> {
        let subfolder = SubfolderPath::parse(subfolder)?;
        operations::load_file(&self.app_root, &subfolder, file_name)
    }

    pub fn try_list_directory(
        &self,
        subfolder: &str,
        pattern: &str,
    ) -> Result<ListResult, StoreError> {
        let subfolder = SubfolderPath::parse(subfolder)?;
        operations::list_directory(&self.app_root, &subfolder, pattern)
    }

    /// Saves `content` as text. Returns false after reporting any failure.
    pub fn save_text(&self, file_name: &str, content: &str, subfolder: &str) -> bool {
        let result = self.try_save_text(file_name, content, subfolder);
        self.or_report(result, Operation::SaveText, file_name, subfolder)
            .is_some()
    }

    /// Loads a text file. A missing or unreadable file yields an empty string.
    pub fn load_text(&self, file_name: &str, subfolder: &str) -> String {
        let result = self.try_load_text(file_name, subfolder);
        self.or_report(result, Operation::LoadText, file_name, subfolder)
            .unwrap_or_default()
    }

    pub fn save_binary(&self, file_name: &str, content: &[u8], subfolder: &str) -> bool {
        let result = self.try_save_binary(file_name, content, subfolder);
        self.or_report(result, Operation::SaveBinary, file_name, subfolder)
            .is_some()
    }

    pub fn load_binary(&self, file_name: &str, subfolder: &str) -> Vec<u8> {
        let result = self.try_load_binary(file_name, subfolder);
        self.or_report(result, Operation::LoadBinary, file_name, subfolder)
            .unwrap_or_default()
    }

    /// Absolute paths of matching files, or nothing if the listing fails.
    pub fn list_directory(&self, subfolder: &str, pattern: &str) -> Vec<PathBuf> {
        let result = self.try_list_directory(subfolder, pattern);
        self.or_report(result, Operation::ListDirectory, pattern, subfolder)
            .map(|listing| listing.entries)
            .unwrap_or_default()
    }

    fn or_report<T>(
        &self,
        result: Result<T, StoreError>,
        operation: Operation,
        target: &str,
        subfolder: &str,
    ) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.sink.report(&Diagnostic {
                    operation,
                    target,
                    subfolder,
                    error: &error,
                });
                None
            }
        }
    }
}
