//! # Core Module
//!
//! Configuration and startup plumbing shared by the library and the binary.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial creation with config module

pub mod config;

// Re-export commonly used items
pub use config::{Config, ConfigError};
