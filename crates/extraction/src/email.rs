//! Spoken-email reconstruction
//!
//! ASR output for email addresses is the hardest field: backends
//! mis-hear "at"/"dot", drop the local-part before `@`, duplicate the
//! `@`, and garble provider names. Repair runs in stages from cheap
//! and safe to increasingly speculative, stopping at the first stage
//! that yields a validated address. A value is only ever returned if
//! it passes the canonical `local@domain.tld` shape check; otherwise
//! the result is empty text.

use crate::normalize::normalize;
use once_cell::sync::Lazy;
use regex::Regex;

/// Canonical email shape, tld of at least two letters
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

static EMAIL_EXACT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap());

/// Introductory phrases speakers use before dictating the address
static INTRO_PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:my email address is|email address is|my email is|email is|mail id is|mail id|contact me at|email)\s*[:,]?\s+([\w\s@.+\-]+)",
    )
    .unwrap()
});

/// A local-part left dangling before a spoken or literal `@`
static DANGLING_LOCAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w+)\s+@").unwrap());

static AT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"@{2,}").unwrap());

/// Common ASR corruptions of provider names
static DOMAIN_CORRECTIONS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    let table: &[(&str, &str)] = &[
        ("egmail", "gmail"),
        ("gmial", "gmail"),
        ("gamil", "gmail"),
        ("gmale", "gmail"),
        ("gmil", "gmail"),
        ("hotmal", "hotmail"),
        ("hotmial", "hotmail"),
        ("outlok", "outlook"),
        ("yahooo", "yahoo"),
        ("yaho", "yahoo"),
    ];

    table
        .iter()
        .map(|(typo, fixed)| (Regex::new(&format!(r"(?i)\b{typo}\b")).unwrap(), *fixed))
        .collect()
});

/// Words that only mean a symbol in the email context
static EMAIL_ONLY_WORDS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    let table: &[(&str, &str)] = &[
        (r"\badd\b", "@"),
        (r"\bplus\b", "+"),
        (r"\bminus\b", "-"),
    ];

    table
        .iter()
        .map(|(pattern, symbol)| (Regex::new(&format!("(?i){pattern}")).unwrap(), *symbol))
        .collect()
});

const DEFAULT_TLD: &str = ".com";

/// Check a candidate against the canonical `local@domain.tld` shape
pub fn is_valid_email(text: &str) -> bool {
    EMAIL_EXACT.is_match(text)
}

/// Extract and repair an email address from a transcript
///
/// Empty text signals failure: no stage produced a candidate that
/// passed the shape check. An invalid address is never returned.
pub fn extract_email(transcript: &str) -> String {
    if transcript.trim().is_empty() {
        return String::new();
    }

    let candidate = strip_intro_phrase(transcript);

    // 1. already a well-formed address
    if is_valid_email(candidate) {
        return candidate.to_string();
    }

    // 2. contains '@' but malformed: collapse duplicate-@ artifacts,
    //    recover a dropped local-part, fix provider typos, rescan
    if candidate.contains('@') {
        let repaired = repair_malformed(candidate);
        if let Some(found) = find_email(&repaired) {
            tracing::debug!(email = %found, "email recovered by malformed-pattern repair");
            return found;
        }
    }

    // 3. spoken symbol words over the whole candidate
    let normalized = correct_domains(&normalize_spoken(candidate));
    if let Some(found) = find_email(&normalized) {
        tracing::debug!(email = %found, "email recovered by symbol substitution");
        return found;
    }

    // 4. last resort: rebuild local@domain from the fragments
    if let Some(rebuilt) = reconstruct(&normalized) {
        tracing::debug!(email = %rebuilt, "email rebuilt from fragments");
        return rebuilt;
    }

    tracing::warn!(transcript, "no valid email could be reconstructed");
    String::new()
}

/// Drop the introductory phrase so surrounding words cannot glue onto
/// the local-part when whitespace collapses
fn strip_intro_phrase(transcript: &str) -> &str {
    INTRO_PHRASE
        .captures(transcript)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|captured| !captured.is_empty())
        .unwrap_or_else(|| transcript.trim())
}

fn repair_malformed(text: &str) -> String {
    let mut repaired = DANGLING_LOCAL.replace_all(text.trim(), "${1}@").into_owned();

    // a stray '@' stuck in front of the true local-part
    while repaired.starts_with('@') && repaired[1..].contains('@') {
        repaired.remove(0);
    }

    let collapsed = AT_RUN.replace_all(&repaired, "@");
    correct_domains(&collapsed)
}

fn correct_domains(text: &str) -> String {
    let mut out = text.to_string();
    for (typo, fixed) in DOMAIN_CORRECTIONS.iter() {
        out = typo.replace_all(&out, *fixed).into_owned();
    }
    out
}

/// Normalizer pass extended with words that are only symbols when an
/// email is being dictated
fn normalize_spoken(text: &str) -> String {
    let mut expanded = text.to_lowercase();
    for (pattern, symbol) in EMAIL_ONLY_WORDS.iter() {
        expanded = pattern.replace_all(&expanded, *symbol).into_owned();
    }
    normalize(&expanded)
}

fn find_email(text: &str) -> Option<String> {
    EMAIL_SHAPE.find(text).map(|found| found.as_str().to_string())
}

fn reconstruct(text: &str) -> Option<String> {
    if text.matches('@').count() != 1 {
        return None;
    }
    let (local_raw, domain_raw) = text.split_once('@')?;

    let local: String = local_raw.chars().filter(|c| is_local_char(*c)).collect();
    let mut domain: String = domain_raw.chars().filter(|c| is_domain_char(*c)).collect();

    if local.is_empty() || domain.trim_matches('.').is_empty() {
        return None;
    }
    if !domain.contains('.') {
        domain.push_str(DEFAULT_TLD);
    }

    let rebuilt = format!("{local}@{domain}");
    is_valid_email(&rebuilt).then_some(rebuilt)
}

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-')
}

fn is_domain_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_match() {
        assert_eq!(extract_email("john@gmail.com"), "john@gmail.com");
        assert_eq!(
            extract_email("my email is john@gmail.com"),
            "john@gmail.com"
        );
    }

    #[test]
    fn test_spoken_symbols() {
        assert_eq!(
            extract_email("my email is john dot smith at gmail dot com"),
            "john.smith@gmail.com"
        );
        assert_eq!(
            extract_email("jane underscore doe at yahoo dot co dot in"),
            "jane_doe@yahoo.co.in"
        );
    }

    #[test]
    fn test_duplicate_at_and_domain_typo() {
        let repaired = extract_email("@ther@egmail.com");
        assert_eq!(repaired, "ther@gmail.com");
        assert_eq!(repaired.matches('@').count(), 1);
        assert!(repaired.ends_with("gmail.com"));
    }

    #[test]
    fn test_dropped_local_part() {
        // the word preceding the '@' is adopted as the local-part
        assert_eq!(extract_email("john @gmail.com"), "john@gmail.com");
    }

    #[test]
    fn test_domain_typos_after_substitution() {
        assert_eq!(
            extract_email("rahul at gmial dot com"),
            "rahul@gmail.com"
        );
        assert_eq!(
            extract_email("priya at hotmal dot com"),
            "priya@hotmail.com"
        );
    }

    #[test]
    fn test_structural_reconstruction() {
        // no dot spoken for the tld: default to .com
        assert_eq!(extract_email("john at gmail"), "john@gmail.com");
        // stray characters outside the permitted set are stripped
        assert_eq!(extract_email("john! at gmail?"), "john@gmail.com");
    }

    #[test]
    fn test_unrecoverable_inputs() {
        assert_eq!(extract_email("username@"), "");
        assert_eq!(extract_email(""), "");
        assert_eq!(extract_email("no address here"), "");
    }

    #[test]
    fn test_never_returns_invalid() {
        let inputs = [
            "username@",
            "@",
            "at at at",
            "dot dot dot",
            "john at smith at gmail dot com",
            "garbage ### input",
        ];
        for input in inputs {
            let result = extract_email(input);
            assert!(
                result.is_empty() || is_valid_email(&result),
                "input {input:?} produced invalid result {result:?}"
            );
        }
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b.c"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a b@c.com"));
    }
}
