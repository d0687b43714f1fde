//! Spoken-symbol text normalization
//!
//! ASR backends transcribe punctuation as words: "john dot smith at
//! gmail dot com". The normalizer rewrites those words to their literal
//! characters and collapses whitespace, producing a contiguous token
//! suitable for address-like text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Spoken words and the symbols they stand for, longest phrase first
/// so "at the rate" is never shadowed by the bare "at".
static SYMBOL_WORDS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    let table: &[(&str, &str)] = &[
        ("at the rate of", "@"),
        ("at the rate", "@"),
        ("at the symbol", "@"),
        ("at sign", "@"),
        ("at", "@"),
        ("full stop", "."),
        ("dot", "."),
        ("period", "."),
        ("point", "."),
        ("underscore", "_"),
        ("dash", "-"),
        ("hyphen", "-"),
    ];

    table
        .iter()
        .map(|(word, symbol)| {
            let pattern = format!(r"(?i)\b{}\b", word.replace(' ', r"\s+"));
            (Regex::new(&pattern).unwrap(), *symbol)
        })
        .collect()
});

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static REPEATED_AT: Lazy<Regex> = Lazy::new(|| Regex::new(r"@{2,}").unwrap());
static REPEATED_DOT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.{2,}").unwrap());

/// Normalize spoken-symbol text into one contiguous lowercase token
///
/// Lowercases, substitutes symbol words, strips all whitespace, and
/// collapses runs of `@` and `.` left behind by cascading
/// substitutions. Pure and idempotent: re-applying to already
/// normalized text changes nothing.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let substituted = substitute_symbol_words(&lowered);
    let joined = WHITESPACE.replace_all(&substituted, "").into_owned();

    // collapsing whitespace can join fragments into new symbol words
    // ("d ot" -> "dot"), so substitute once more on the joined text
    let substituted = substitute_symbol_words(&joined);

    let collapsed = REPEATED_AT.replace_all(&substituted, "@");
    REPEATED_DOT.replace_all(&collapsed, ".").into_owned()
}

fn substitute_symbol_words(text: &str) -> String {
    let mut out = text.to_string();
    for (pattern, symbol) in SYMBOL_WORDS.iter() {
        out = pattern.replace_all(&out, *symbol).into_owned();
    }
    out
}
