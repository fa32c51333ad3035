//! # Feature: Category Registry
//!
//! Static table of advice categories (健康, お金, 人間関係, 仕事). Each category carries
//! the description shown after selection, the persona system prompt sent to the model,
//! and the keyword list used by the relevance check. Built once at startup, read-only after.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial release with 4 categories

use super::choices::CATEGORY_CHOICES;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    /// Shown to the user once the category is selected
    pub description: &'static str,
    pub system_prompt: &'static str,
    pub keywords: &'static [&'static str],
}

impl Category {
    /// Hint text for the consultation input box
    pub fn placeholder(&self) -> String {
        format!("{}に関するお悩みを具体的に書いてください...", self.name)
    }
}

#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    categories: HashMap<&'static str, Category>,
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryRegistry {
    pub fn new() -> Self {
        let mut categories = HashMap::new();

        categories.insert(
            "健康",
            Category {
                name: "健康",
                description: "健康に関するお悩みですね。",
                system_prompt:
                    "あなたは健康に関する専門家です。お悩みに対して親身に答えてください。",
                keywords: &[
                    "病気", "体調", "症状", "健康", "医療", "薬", "治療", "痛み", "疲れ", "睡眠",
                    "運動", "食事",
                ],
            },
        );

        categories.insert(
            "お金",
            Category {
                name: "お金",
                description: "お金に関するお悩みですね。",
                system_prompt:
                    "あなたはお金に関する専門家です。お悩みに対して親身に答えてください。",
                keywords: &[
                    "お金", "貯金", "投資", "家計", "節約", "借金", "ローン", "給料", "収入",
                    "支出", "税金", "年金",
                ],
            },
        );

        categories.insert(
            "人間関係",
            Category {
                name: "人間関係",
                description: "人間関係に関するお悩みですね。",
                system_prompt:
                    "あなたは人間関係に関する専門家です。お悩みに対して親身に答えてください。",
                keywords: &[
                    "友達",
                    "恋人",
                    "家族",
                    "職場",
                    "上司",
                    "部下",
                    "同僚",
                    "コミュニケーション",
                    "喧嘩",
                    "恋愛",
                    "結婚",
                    "離婚",
                ],
            },
        );

        // 職場 is shared with 人間関係
        categories.insert(
            "仕事",
            Category {
                name: "仕事",
                description: "仕事に関するお悩みですね。",
                system_prompt:
                    "あなたは仕事に関する専門家です。お悩みに対して親身に答えてください。",
                keywords: &[
                    "仕事",
                    "転職",
                    "就職",
                    "キャリア",
                    "スキル",
                    "残業",
                    "ストレス",
                    "会社",
                    "職場",
                    "昇進",
                    "評価",
                    "プロジェクト",
                ],
            },
        );

        CategoryRegistry { categories }
    }

    pub fn get_category(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    /// Categories in selector order
    pub fn list_categories(&self) -> Vec<&Category> {
        CATEGORY_CHOICES
            .iter()
            .filter_map(|name| self.categories.get(name))
            .collect()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.list_categories().iter().map(|c| c.name).collect()
    }
}
