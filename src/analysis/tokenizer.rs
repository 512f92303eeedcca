//! Word and sentence tokenization

use lazy_static::lazy_static;
use regex::Regex;

use crate::analysis::lexicon::is_stop_word;

lazy_static! {
    /// Alphabetic runs, optionally joined by single internal hyphens ("laid-back")
    static ref WORD_PATTERN: Regex =
        Regex::new(r"\p{Alphabetic}+(?:-\p{Alphabetic}+)*").expect("Invalid regex: word pattern");
    /// Terminal punctuation followed by whitespace or the end of the text
    static ref SENTENCE_BOUNDARY: Regex =
        Regex::new(r"[.!?]+(?:\s+|$)").expect("Invalid regex: sentence boundary");
    static ref TOKEN_PATTERN: Regex =
        Regex::new(r"\w+(?:-\w+)*|\.{3}|[^\w\s]").expect("Invalid regex: token pattern");
}

/// Titles that end in a period without ending the sentence
const ABBREVIATIONS: &[&str] = &["mr", "mrs", "ms", "dr", "prof", "st", "jr", "sr", "vs"];

/// Lowercase word tokens in order of appearance
pub fn words(text: &str) -> Vec<String> {
    WORD_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Word, number and punctuation tokens, case preserved
pub fn tokens(text: &str) -> Vec<&str> {
    TOKEN_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

/// A single period after "e.g" or "Dr" does not close a sentence
fn is_abbreviation(preceding: &str, terminator: &str) -> bool {
    if terminator.trim_end() != "." {
        return false;
    }
    let last_word = preceding
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or_default();
    last_word.contains('.') || ABBREVIATIONS.contains(&last_word.to_lowercase().as_str())
}

/// Sentences delimited by terminal punctuation, terminator included
///
/// A terminator only counts when followed by whitespace or the end of the
/// text, so "3.5" stays inside its sentence. Fragments without any
/// alphanumeric character are not sentences.
pub fn sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        if is_abbreviation(&text[start..boundary.start()], boundary.as_str()) {
            continue;
        }
        sentences.push(text[start..boundary.end()].trim());
        start = boundary.end();
    }
    sentences.push(text[start..].trim());
    sentences.retain(|s| s.chars().any(char::is_alphanumeric));
    sentences
}

/// A purely alphabetic token that is not a stop word
pub fn is_meaningful(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic) && !is_stop_word(token)
}

/// Meaningful tokens of a text, lowercased, in order
pub fn meaningful_words(text: &str) -> Vec<String> {
    words(text)
        .into_iter()
        .filter(|w| is_meaningful(w))
        .collect()
}
