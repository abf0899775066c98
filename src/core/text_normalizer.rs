//! Answer Normalization
//!
//! Brings typed German answers into a form that compares equal regardless
//! of case, spacing and umlaut transliteration ("Fünf " == "fuenf").

use strsim::normalized_levenshtein;

/// Normalize German text for comparison. Never displayed.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .replace(' ', "")
        .replace('ß', "ss")
        .replace('ä', "ae")
        .replace('ö', "oe")
        .replace('ü', "ue")
        .trim()
        .to_string()
}

/// Whether two answers are the same after normalization
pub fn answers_match(answer: &str, expected: &str) -> bool {
    normalize(answer) == normalize(expected)
}

/// Similarity (0.0-1.0) between two answers after normalization
pub fn similarity(answer: &str, expected: &str) -> f64 {
    normalized_levenshtein(&normalize(answer), &normalize(expected))
}
