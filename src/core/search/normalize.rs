//! Query and Title Normalization
//!
//! Shared string utilities for the match pipeline: lowercase/trim
//! normalization, a punctuation-stripped variant, the similarity metric, and
//! the stop-word guard that short-circuits useless queries.

/// Lowercased, trimmed form of a query or title.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Punctuation-normalized variant: non-alphanumeric characters become
/// spaces, whitespace collapses. "Spider-Man: Homecoming" and
/// "spider man homecoming" normalize identically.
pub fn normalize_punct(text: &str) -> String {
    let mapped: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalized Levenshtein similarity in `[0, 1]`.
pub fn similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b)
}

/// Words that match half the catalog and nothing in particular. Queries
/// consisting of one of these short-circuit to an empty result set.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "of", "in", "on", "at", "to", "it", "is", "be", "as", "by",
];

pub fn is_stop_word(term: &str) -> bool {
    let normalized = normalize(term);
    STOP_WORDS.contains(&normalized.as_str())
}

/// Words long enough to carry signal in the word-overlap stage.
pub fn significant_words(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .filter(|w| w.chars().count() >= 3)
        .collect()
}
