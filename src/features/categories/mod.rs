//! # Categories Feature
//!
//! The four fixed advice categories, each with a persona prompt and keyword list.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial release

pub mod choices;
pub mod registry;

pub use choices::{is_valid_category, CATEGORY_CHOICES};
pub use registry::{Category, CategoryRegistry};
