//! Input validation for consultation text
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Empty / denylist / length checks

/// Minimum number of characters after trimming
pub const MIN_CHARS: usize = 5;
/// Maximum number of characters, counted on the raw input
pub const MAX_CHARS: usize = 500;

/// Terms that block a consultation outright, matched case-sensitively as substrings
pub const DENYLIST: &[&str] = &["死にたい", "自殺", "殺", "爆弾"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyInput,
    TooShort,
    TooLong,
    Disallowed,
}

impl ValidationError {
    /// User-facing message for this failure
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::EmptyInput => "お悩みを入力してください。",
            ValidationError::TooShort => "お悩みをもう少し詳しく入力してください（5文字以上）。",
            ValidationError::TooLong => "入力文字数が多すぎます（500文字以内でお願いします）。",
            ValidationError::Disallowed => {
                "申し訳ありませんが、この内容についてはお答えできません。専門機関にご相談をお勧めします。"
            }
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Flattened `{ok, message}` view of a validation outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub ok: bool,
    pub message: String,
}

impl From<Result<(), ValidationError>> for ValidationResult {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => ValidationResult {
                ok: true,
                message: String::new(),
            },
            Err(e) => ValidationResult {
                ok: false,
                message: e.message().to_string(),
            },
        }
    }
}

/// Check consultation text.
///
/// Order: empty, denylist, too short, too long. The denylist runs before the
/// length checks so that short texts such as "死にたい" still get the referral message.
pub fn validate(text: &str) -> Result<(), ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    if DENYLIST.iter().any(|term| text.contains(term)) {
        return Err(ValidationError::Disallowed);
    }

    if trimmed.chars().count() < MIN_CHARS {
        return Err(ValidationError::TooShort);
    }

    if text.chars().count() > MAX_CHARS {
        return Err(ValidationError::TooLong);
    }

    Ok(())
}

/// Same checks as [`validate`], as a `ValidationResult`
pub fn validate_input(text: &str) -> ValidationResult {
    validate(text).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(validate(""), Err(ValidationError::EmptyInput));
        assert_eq!(validate("   "), Err(ValidationError::EmptyInput));
        assert_eq!(validate("\n\t　"), Err(ValidationError::EmptyInput));
    }

    #[test]
    fn test_too_short_counts_trimmed_chars() {
        assert_eq!(validate("眠れない"), Err(ValidationError::TooShort));
        assert_eq!(validate("   abcd   "), Err(ValidationError::TooShort));
        assert_eq!(validate("眠れないよ"), Ok(()));
    }

    #[test]
    fn test_length_is_counted_in_characters() {
        // 500 three-byte characters is 1500 bytes but still within the limit
        let at_limit = "あ".repeat(MAX_CHARS);
        assert_eq!(validate(&at_limit), Ok(()));

        let over_limit = "あ".repeat(MAX_CHARS + 1);
        assert_eq!(validate(&over_limit), Err(ValidationError::TooLong));
    }

    #[test]
    fn test_too_long_uses_raw_length() {
        // Trailing whitespace still counts toward the upper bound
        let padded = format!("{}{}", "a".repeat(MAX_CHARS), " ");
        assert_eq!(validate(&padded), Err(ValidationError::TooLong));
    }

    #[test]
    fn test_denylist_rejects_regardless_of_content() {
        assert_eq!(validate("死にたい"), Err(ValidationError::Disallowed));
        assert_eq!(
            validate("仕事がつらくて自殺を考えています"),
            Err(ValidationError::Disallowed)
        );
        assert_eq!(validate("爆弾"), Err(ValidationError::Disallowed));

        let long = format!("{}殺", "あ".repeat(MAX_CHARS + 10));
        assert_eq!(validate(&long), Err(ValidationError::Disallowed));
    }

    #[test]
    fn test_single_kanji_denylist_term_matches_inside_words() {
        // 殺 is a substring match, so compounds containing it are blocked too
        assert_eq!(validate("殺風景な部屋に住んでいます"), Err(ValidationError::Disallowed));
    }

    #[test]
    fn test_valid_input() {
        assert_eq!(validate("最近体調が悪くて眠れません"), Ok(()));
        assert_eq!(validate("友達と喧嘩した"), Ok(()));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::EmptyInput.to_string(),
            "お悩みを入力してください。"
        );
        assert!(ValidationError::TooShort.message().contains("5文字以上"));
        assert!(ValidationError::TooLong.message().contains("500文字以内"));
        assert!(ValidationError::Disallowed.message().contains("専門機関にご相談"));
    }

    #[test]
    fn test_validation_result_view() {
        assert_eq!(
            validate_input("最近体調が悪くて眠れません"),
            ValidationResult {
                ok: true,
                message: String::new()
            }
        );

        let rejected = validate_input("死にたい");
        assert!(!rejected.ok);
        assert_eq!(rejected.message, ValidationError::Disallowed.message());
    }
}
