//! Extraction dispatcher
//!
//! Top-level entry point: decides per call, purely from the inputs,
//! whether to extract, repair, or pass through. Never returns an
//! error — every leg ends in a text value.

use crate::{email, patterns};
use voice_form_core::{Field, Language, TranscriptResult};

/// Extract one field value from a transcript
///
/// - empty transcript: empty text
/// - non-English language tag: the transcript verbatim (deep
///   multilingual parsing is a non-goal)
/// - email: the staged reconstructor
/// - everything else: the pattern matcher with its field-dependent
///   fallback
pub fn extract_single_field(transcript: &str, field: Field, language_tag: &str) -> String {
    if transcript.trim().is_empty() {
        tracing::debug!(field = %field, "empty transcript, nothing to extract");
        return String::new();
    }

    let language = Language::from_tag(language_tag);
    if !language.is_english() {
        tracing::debug!(
            field = %field,
            language = %language,
            "unsupported language, passing transcript through"
        );
        return transcript.to_string();
    }

    let value = match field {
        Field::Email => email::extract_email(transcript),
        other => patterns::match_field(transcript, other),
    };

    tracing::debug!(field = %field, value = %value, "extraction complete");
    value
}

/// Extract a field from an ASR transcript value
///
/// Backends that do not report a language are assumed English, as the
/// English-only models behave.
pub fn extract_from_transcript(result: &TranscriptResult, field: Field) -> String {
    let tag = result.language.as_deref().unwrap_or("en");
    extract_single_field(&result.text, field, tag)
}
