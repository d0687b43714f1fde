//! Per-field extraction patterns
//!
//! Each field carries an ordered list of candidate patterns; the first
//! non-empty capture wins. Pattern tables are compiled once and shared
//! read-only across calls. One canonical table serves every ASR
//! backend — backend identity never changes extraction behavior.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use voice_form_core::Field;

static FIELD_PATTERNS: Lazy<HashMap<Field, Vec<Regex>>> = Lazy::new(|| {
    let mut patterns = HashMap::new();

    // proper-noun sequence of two or more capitalized words, ideally
    // after an introductory phrase
    patterns.insert(
        Field::CandidateName,
        compile(&[
            r"(?i:my name is|i am|i'm|im|name is|this is)\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)+)",
            r"^\s*([A-Z][a-z]+(?:\s+[A-Z][a-z]+)+)\s*$",
            r"([A-Z][a-z]+ [A-Z][a-z]+)",
        ]),
    );

    // integer next to a unit word, or a bare integer as last resort
    patterns.insert(
        Field::YearsOfExperience,
        compile(&[
            r"(?i)(\d+)\s*\+?\s*(?:years?|yrs?|yoe|y)\b",
            r"(?i)\bexperience\s+of\s+(\d+)",
            r"(\d+)",
        ]),
    );

    // job titles are not lexically distinctive; free text after an
    // introductory phrase, else the whole utterance
    patterns.insert(
        Field::CurrentDesignation,
        compile(&[
            r"(?i)(?:i am an|i'm an|i am a|i'm a|my designation is|i work as an|i work as a|i work as|my role is|role is|as a)\s+([a-z ]+)",
            r"(?i)^\s*([a-z ]+)\s*$",
        ]),
    );

    patterns.insert(
        Field::Address,
        compile(&[
            r"(?i)(?:i live at|i live in|my address is|address is|located at|residing at)\s+([a-z0-9,\- ]+)",
            r"(?i)^\s*([a-z0-9,\- ]+)\s*$",
        ]),
    );

    patterns
});

fn compile(sources: &[&str]) -> Vec<Regex> {
    sources.iter().map(|s| Regex::new(s).unwrap()).collect()
}

/// Match a non-email field against its ordered pattern list
///
/// Returns the first non-empty capture, trimmed. When nothing matches,
/// the fallback is field-dependent: free-text fields return the whole
/// transcript (the speaker likely said only the value), numeric fields
/// return empty text rather than fabricate a number. Fields with no
/// pattern list (email routes elsewhere) return empty text.
pub fn match_field(transcript: &str, field: Field) -> String {
    let field_patterns = match FIELD_PATTERNS.get(&field) {
        Some(list) => list,
        None => return String::new(),
    };

    for pattern in field_patterns {
        if let Some(captures) = pattern.captures(transcript) {
            if let Some(group) = captures.get(1) {
                let value = group.as_str().trim();
                if !value.is_empty() {
                    tracing::debug!(field = %field, value = %value, "pattern matched");
                    return value.to_string();
                }
            }
        }
    }

    fallback(transcript, field)
}

fn fallback(transcript: &str, field: Field) -> String {
    match field {
        Field::CandidateName | Field::CurrentDesignation | Field::Address => {
            tracing::debug!(field = %field, "no pattern matched, returning transcript verbatim");
            transcript.to_string()
        }
        _ => {
            tracing::debug!(field = %field, "no pattern matched");
            String::new()
        }
    }
}
