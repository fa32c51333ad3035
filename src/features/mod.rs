//! # Features Layer
//!
//! - **categories**: static advice categories with persona prompts and keywords
//! - **consultation**: input validation, keyword relevance, and the consultation desk
//! - **advisor**: chat-completion client and apology-on-failure response generation

pub mod advisor;
pub mod categories;
pub mod consultation;

pub use advisor::{CompletionClient, OpenAiClient, ResponseGenerator};
pub use categories::{Category, CategoryRegistry};
pub use consultation::{ConsultationDesk, DeskReply, ValidationError};
