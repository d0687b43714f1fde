//! Language tags reported by ASR backends

use serde::{Deserialize, Serialize};
use std::fmt;

/// Spoken language of a transcript
///
/// Backends disagree on tag spelling: Whisper reports ISO 639-1 codes
/// ("en", "hi") while the route layer historically used long names
/// ("english", "hindi"). Both alias families parse here. Tags are
/// otherwise opaque labels; anything unrecognized maps to `Other` and
/// takes the pass-through path in the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Hindi,
    Other,
}

impl Language {
    /// Parse an ASR-provided language tag
    pub fn from_tag(tag: &str) -> Language {
        match tag.trim().to_lowercase().as_str() {
            "en" | "eng" | "english" | "en-us" | "en-gb" | "en-in" => Language::English,
            "hi" | "hin" | "hindi" => Language::Hindi,
            _ => Language::Other,
        }
    }

    /// Whether pattern-based extraction applies to this language
    pub fn is_english(&self) -> bool {
        matches!(self, Language::English)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Hindi => "hindi",
            Language::Other => "other",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_aliases() {
        for tag in ["en", "EN", "english", "English", "en-IN", "eng"] {
            assert_eq!(Language::from_tag(tag), Language::English, "tag: {tag}");
        }
    }

    #[test]
    fn test_hindi_aliases() {
        assert_eq!(Language::from_tag("hi"), Language::Hindi);
        assert_eq!(Language::from_tag("hindi"), Language::Hindi);
    }

    #[test]
    fn test_unknown_tags() {
        assert_eq!(Language::from_tag("ta"), Language::Other);
        assert_eq!(Language::from_tag(""), Language::Other);
        assert_eq!(Language::from_tag("fr-FR"), Language::Other);
    }

    #[test]
    fn test_is_english() {
        assert!(Language::from_tag("en").is_english());
        assert!(!Language::from_tag("hi").is_english());
    }
}
