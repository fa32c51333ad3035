//! Category names in selector order
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

/// All category names, in the order the selector shows them
pub const CATEGORY_CHOICES: &[&str] = &["健康", "お金", "人間関係", "仕事"];

/// Validate a category name exists
pub fn is_valid_category(name: &str) -> bool {
    CATEGORY_CHOICES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_choices_complete() {
        assert_eq!(CATEGORY_CHOICES.len(), 4);
    }

    #[test]
    fn test_is_valid_category() {
        assert!(is_valid_category("健康"));
        assert!(is_valid_category("仕事"));
        assert!(!is_valid_category("恋愛"));
        assert!(!is_valid_category(""));
    }

    #[test]
    fn test_all_categories_have_unique_names() {
        let mut names: Vec<&str> = CATEGORY_CHOICES.to_vec();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), CATEGORY_CHOICES.len(), "Duplicate category names found");
    }
}
