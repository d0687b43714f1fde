//! Transcript values handed over by ASR backends

use crate::Result;
use serde::{Deserialize, Serialize};

/// One utterance as transcribed by an ASR backend
///
/// This is the narrow boundary value the extraction engine consumes:
/// free text plus the tag of the language the backend believes was
/// spoken. The engine treats both as untrusted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptResult {
    /// Transcribed text, possibly empty
    pub text: String,

    /// Detected language tag, if the backend reports one
    pub language: Option<String>,

    /// Confidence score (0.0 - 1.0)
    pub confidence: f32,
}

impl TranscriptResult {
    /// Create a new transcript result
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: None,
            confidence: 0.0,
        }
    }

    /// Set the detected language tag
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the confidence score
    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = confidence;
        self
    }

    /// Check if the transcript is empty
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Get word count
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

impl Default for TranscriptResult {
    fn default() -> Self {
        Self {
            text: String::new(),
            language: None,
            confidence: 0.0,
        }
    }
}

/// Source of transcripts: the seam to the capture/ASR collaborator
///
/// Implementations own audio capture and model inference; the
/// extraction engine never sees either. A source either yields a
/// transcript or reports a capture error — it never fabricates text.
pub trait TranscriptSource {
    /// Produce the next utterance transcript
    fn next_transcript(&mut self) -> Result<TranscriptResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let result = TranscriptResult::new("my name is John Smith")
            .with_language("en")
            .with_confidence(0.92);

        assert_eq!(result.language.as_deref(), Some("en"));
        assert_eq!(result.word_count(), 5);
        assert!(!result.is_empty());
    }

    #[test]
    fn test_empty_detection() {
        assert!(TranscriptResult::default().is_empty());
        assert!(TranscriptResult::new("   ").is_empty());
        assert!(!TranscriptResult::new("hello").is_empty());
    }
}
