//! Market to language inference.
//!
//! Maps a free-text market name to a base language via case-insensitive
//! substring matching over an ordered keyword table. The table order is
//! significant: more specific keywords (cities, native spellings) come
//! before broader ones, and the first match wins.

use serde::{Deserialize, Serialize};

/// A resolved campaign language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// Short language code, e.g. "ES"
    pub code: String,
    /// Human readable label, e.g. "Spanish"
    pub label: String,
}

impl Language {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }

    /// The default language used when inference finds no match and the
    /// user asks for the market's native language anyway.
    pub fn default_english() -> Self {
        Self::new("EN", "English")
    }
}

/// Ordered keyword table. First match wins, so keep specific entries
/// (cities, native-script spellings) ahead of country and region names.
const KEYWORD_TABLE: &[(&str, &str, &str)] = &[
    ("buenos aires", "ES", "Spanish"),
    ("lima", "ES", "Spanish"),
    ("argentina", "ES", "Spanish"),
    ("peru", "ES", "Spanish"),
    ("ישראל", "HE", "Hebrew"),
    ("israel", "HE", "Hebrew"),
    ("italy", "IT", "Italian"),
    ("south africa", "EN", "English"),
    ("malawi", "EN", "English"),
    ("zambia", "EN", "English"),
    ("africa", "EN", "English"),
];

/// Infers the native language of a market from its free-text name.
///
/// Pure and total: unknown or empty input yields `None` and the caller
/// supplies its own default (typically [`Language::default_english`]).
pub fn infer_native_language(market: &str) -> Option<Language> {
    let m = market.trim().to_lowercase();
    if m.is_empty() {
        return None;
    }

    KEYWORD_TABLE
        .iter()
        .find(|(keyword, _, _)| m.contains(keyword))
        .map(|(_, code, label)| Language::new(*code, *label))
}
