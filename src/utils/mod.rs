//! Utility functions
//!
//! Provides logging setup and name validation utilities.

pub mod logging;
pub mod validation;
