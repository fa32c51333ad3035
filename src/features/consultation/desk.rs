//! # Feature: Consultation Desk
//!
//! Single entry point for the form: validate the text, check it against the selected
//! category, and only then ask the advisor. A relevance mismatch is not an error; the
//! caller can resubmit with `force` set once the user chooses to continue anyway.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial release

use super::relevance::{check_relevance, RelevanceCheck};
use super::validator::validate;
use crate::features::advisor::ResponseGenerator;
use crate::features::categories::{Category, CategoryRegistry};
use log::{debug, info};
use uuid::Uuid;

pub const UNSUPPORTED_CATEGORY_MESSAGE: &str =
    "⚠️ 申し訳ありません。選択されたカテゴリーは現在サポートされていません。";

/// One submission from the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsultationRequest<'a> {
    pub category: &'a Category,
    pub raw_text: String,
}

/// What the form should show for a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeskReply {
    /// Category name not in the registry
    Unsupported(String),
    /// Validation failed; nothing was sent
    InvalidInput(String),
    /// Text does not look like it belongs to the category; resubmit with force to proceed
    RelevanceWarning(String),
    /// Generated answer, or the apology if generation failed
    Answer(String),
}

#[derive(Clone)]
pub struct ConsultationDesk {
    registry: CategoryRegistry,
    generator: ResponseGenerator,
}

impl ConsultationDesk {
    pub fn new(registry: CategoryRegistry, generator: ResponseGenerator) -> Self {
        Self {
            registry,
            generator,
        }
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    /// Run every check that precedes generation.
    ///
    /// `Err` carries the reply to show instead of an answer. With `force` set a relevance
    /// mismatch is let through; validation failures never are.
    pub fn screen(
        &self,
        category_name: &str,
        text: &str,
        force: bool,
        request_id: Uuid,
    ) -> Result<ConsultationRequest<'_>, DeskReply> {
        let category = self.registry.get_category(category_name).ok_or_else(|| {
            info!("[{request_id}] Rejected unknown category {category_name:?}");
            DeskReply::Unsupported(UNSUPPORTED_CATEGORY_MESSAGE.to_string())
        })?;
        debug!(
            "[{request_id}] Consultation in {} ({} chars, force={force})",
            category.name,
            text.chars().count()
        );

        if let Err(e) = validate(text) {
            info!("[{request_id}] Input rejected: {e:?}");
            return Err(DeskReply::InvalidInput(e.message().to_string()));
        }

        match check_relevance(text, category) {
            RelevanceCheck::Relevant { matched } => {
                debug!("[{request_id}] Matched keywords: {matched:?}");
            }
            RelevanceCheck::Mismatch { warning } if !force => {
                info!("[{request_id}] No {} keyword matched, awaiting override", category.name);
                return Err(DeskReply::RelevanceWarning(warning));
            }
            RelevanceCheck::Mismatch { .. } => {
                info!("[{request_id}] Proceeding without keyword match on user override");
            }
        }

        Ok(ConsultationRequest {
            category,
            raw_text: text.to_string(),
        })
    }

    /// Generate the answer for a screened request
    pub async fn answer(&self, request: &ConsultationRequest<'_>, request_id: Uuid) -> String {
        self.generator
            .generate(request.category, &request.raw_text, request_id)
            .await
    }

    /// Screen and, if the submission passes, answer it
    pub async fn consult(&self, category_name: &str, text: &str, force: bool) -> DeskReply {
        let request_id = Uuid::new_v4();
        match self.screen(category_name, text, force, request_id) {
            Ok(request) => DeskReply::Answer(self.answer(&request, request_id).await),
            Err(reply) => reply,
        }
    }
}
