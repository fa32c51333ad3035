//! Keyword relevance between consultation text and the selected category
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Case-insensitive substring matching on both sides

use crate::features::categories::Category;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelevanceCheck {
    /// At least one keyword occurs in the text
    Relevant { matched: Vec<&'static str> },
    /// No keyword occurs; carries the warning shown before the override prompt
    Mismatch { warning: String },
}

impl RelevanceCheck {
    pub fn is_relevant(&self) -> bool {
        matches!(self, RelevanceCheck::Relevant { .. })
    }
}

/// Keywords of `category` found in `text`, compared lower-cased on both sides
pub fn matched_keywords(text: &str, category: &Category) -> Vec<&'static str> {
    let text_lower = text.to_lowercase();
    category
        .keywords
        .iter()
        .copied()
        .filter(|keyword| text_lower.contains(&keyword.to_lowercase()))
        .collect()
}

pub fn is_relevant(text: &str, category: &Category) -> bool {
    !matched_keywords(text, category).is_empty()
}

pub fn mismatch_warning(category: &Category) -> String {
    let name = category.name;
    format!(
        "⚠️ 入力内容が「{name}」カテゴリーと関連していない可能性があります。適切なカテゴリーを選択し直すか、{name}に関連する内容で入力し直してください。"
    )
}

pub fn check_relevance(text: &str, category: &Category) -> RelevanceCheck {
    let matched = matched_keywords(text, category);
    if matched.is_empty() {
        RelevanceCheck::Mismatch {
            warning: mismatch_warning(category),
        }
    } else {
        RelevanceCheck::Relevant { matched }
    }
}
