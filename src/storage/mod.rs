//! File system storage management
//!
//! Handles scoped file operations, pattern matching, and path validation.

pub mod filesystem;
pub mod operations;
pub mod pattern;
pub mod results;
pub mod store;
pub mod validation;

pub use results::{ListResult, SaveResult};
pub use store::AppFiles;
pub use validation::SubfolderPath;
