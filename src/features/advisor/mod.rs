//! # Advisor Feature
//!
//! Persona-prompted answers from the chat-completion service.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial release with OpenAI client and apology fallback

pub mod client;
pub mod generator;

pub use client::{CompletionClient, CompletionRequest, OpenAiClient, TEMPERATURE};
pub use generator::{apology, ResponseGenerator};
