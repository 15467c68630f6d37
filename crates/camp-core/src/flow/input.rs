//! User input decoding.
//!
//! Raw transport payloads are decoded exactly once into closed variant
//! types; flow handlers never sniff free-form button labels. Unrecognized
//! choice text simply fails to parse and leads to a re-prompt.

use crate::session::{ConceptMode, CreativeFormat};

/// A discrete user action delivered by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInput {
    /// Fresh-start signal; accepted in any state as cancel-then-restart.
    Start,
    /// Cancellation signal; accepted in any state.
    Cancel,
    /// Free-text message or button selection text.
    Text(String),
}

impl UserInput {
    /// Decodes one raw transport line.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "/start" | "/new" => UserInput::Start,
            "/cancel" | "/stop" => UserInput::Cancel,
            other => UserInput::Text(other.to_string()),
        }
    }
}

/// Decodes a creative format selection.
pub fn parse_format_choice(text: &str) -> Option<CreativeFormat> {
    let t = text.trim().to_lowercase();
    if t.contains("video") || t.contains("veo") {
        Some(CreativeFormat::Video)
    } else if t.contains("image") || t.contains("whisk") {
        Some(CreativeFormat::Image)
    } else {
        None
    }
}

/// Decodes a concept source selection.
pub fn parse_concept_choice(text: &str) -> Option<ConceptMode> {
    let t = text.trim().to_lowercase();
    if t.contains("random") || t.contains("suggest") {
        Some(ConceptMode::Random)
    } else if t.contains("custom") || t.contains("describe") || t.contains("my own") {
        Some(ConceptMode::Custom)
    } else {
        None
    }
}

/// Script language selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageChoice {
    /// The market's inferred native language.
    Native,
    /// Plain English regardless of market.
    English,
}

impl LanguageChoice {
    pub fn parse(text: &str) -> Option<Self> {
        let t = text.trim().to_lowercase();
        if t.contains("native") {
            Some(LanguageChoice::Native)
        } else if t.contains("english") {
            Some(LanguageChoice::English)
        } else {
            None
        }
    }
}

/// Selection from the random idea menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdeaPick {
    /// 1-based index into the presented menu.
    Menu(usize),
    /// Skip the pick; fresh ideas are drawn at generation time.
    Surprise,
}

impl IdeaPick {
    pub fn parse(text: &str, menu_len: usize) -> Option<Self> {
        let t = text.trim().to_lowercase();
        if t == "0" || t.contains("surprise") {
            return Some(IdeaPick::Surprise);
        }
        match t.parse::<usize>() {
            Ok(n) if (1..=menu_len).contains(&n) => Some(IdeaPick::Menu(n)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_decoding() {
        assert_eq!(UserInput::parse("  /start "), UserInput::Start);
        assert_eq!(UserInput::parse("/cancel"), UserInput::Cancel);
        assert_eq!(
            UserInput::parse("hello"),
            UserInput::Text("hello".to_string())
        );
    }

    #[test]
    fn test_format_choice_accepts_generator_names() {
        assert_eq!(parse_format_choice("VEO - Video"), Some(CreativeFormat::Video));
        assert_eq!(parse_format_choice("whisk image"), Some(CreativeFormat::Image));
        assert_eq!(parse_format_choice("audio"), None);
    }

    #[test]
    fn test_concept_choice() {
        assert_eq!(parse_concept_choice("Give me random ideas"), Some(ConceptMode::Random));
        assert_eq!(parse_concept_choice("I will describe my idea"), Some(ConceptMode::Custom));
        assert_eq!(parse_concept_choice("whatever"), None);
    }

    #[test]
    fn test_language_choice() {
        assert_eq!(LanguageChoice::parse("Native language"), Some(LanguageChoice::Native));
        assert_eq!(LanguageChoice::parse("ENGLISH"), Some(LanguageChoice::English));
        assert_eq!(LanguageChoice::parse("French"), None);
    }

    #[test]
    fn test_idea_pick_bounds() {
        assert_eq!(IdeaPick::parse("2", 4), Some(IdeaPick::Menu(2)));
        assert_eq!(IdeaPick::parse("0", 4), Some(IdeaPick::Surprise));
        assert_eq!(IdeaPick::parse("surprise me", 4), Some(IdeaPick::Surprise));
        assert_eq!(IdeaPick::parse("5", 4), None);
        assert_eq!(IdeaPick::parse("two", 4), None);
    }
}
