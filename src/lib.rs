//! Per-application file storage.
//!
//! [`AppFiles`] provisions `root/company/app` once and confines every save,
//! load and list operation to that directory tree.

pub mod commands;
pub mod config;
pub mod error;
pub mod identity;
pub mod storage;
pub mod utils;

pub use config::StoreConfig;
pub use error::{Diagnostic, DiagnosticSink, IdentityError, LogSink, Operation, PathError, StoreError};
pub use identity::AppIdentity;
pub use storage::{AppFiles, ListResult, SaveResult, SubfolderPath};
