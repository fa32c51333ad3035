//! # Consultation Feature
//!
//! Per-submission checks and the desk that chains them to the advisor.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial release with input validation, keyword relevance and desk

pub mod desk;
pub mod relevance;
pub mod validator;

pub use desk::{ConsultationDesk, ConsultationRequest, DeskReply, UNSUPPORTED_CATEGORY_MESSAGE};
pub use relevance::{check_relevance, is_relevant, RelevanceCheck};
pub use validator::{validate, validate_input, ValidationError, ValidationResult};
