// Core layer - configuration
pub mod core;

// Features layer - categories, consultation checks, advisor
pub mod features;

// Re-export core config
pub use core::Config;

// Re-export feature items
pub use features::{
    // Advisor
    CompletionClient, OpenAiClient, ResponseGenerator,
    // Categories
    Category, CategoryRegistry,
    // Consultation
    ConsultationDesk, DeskReply, ValidationError,
};
