//! Identity module
//!
//! Turns an application identity into a provisioned app root directory.

mod resolver;

pub use resolver::{AppIdentity, default_root, resolve};
