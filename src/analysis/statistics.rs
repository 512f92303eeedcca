//! Corpus-level text statistics

use std::collections::HashSet;

use crate::analysis::result::TextStatistics;
use crate::analysis::tokenizer;
use crate::models::Corpus;

/// Guarded division; zero denominators yield 0
pub(crate) fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Word, sentence and vocabulary statistics over the whole corpus
///
/// An empty corpus yields all-zero statistics rather than an error.
pub fn extract_stats(corpus: &Corpus) -> TextStatistics {
    let text = corpus.joined_text();
    let words = tokenizer::words(text);
    let sentences = tokenizer::sentences(text);
    let meaningful: Vec<&str> = words
        .iter()
        .map(String::as_str)
        .filter(|w| tokenizer::is_meaningful(w))
        .collect();
    let vocabulary: HashSet<&str> = meaningful.iter().copied().collect();

    let units = corpus.len() as f64;
    let total_words = words.len();
    let total_sentences = sentences.len();
    let raw_chars: usize = corpus.units().iter().map(|u| u.raw().chars().count()).sum();

    TextStatistics {
        total_texts: corpus.len(),
        total_words,
        meaningful_words: meaningful.len(),
        total_sentences,
        avg_words_per_text: ratio(total_words as f64, units),
        avg_sentences_per_text: ratio(total_sentences as f64, units),
        avg_words_per_sentence: total_words as f64 / total_sentences.max(1) as f64,
        vocabulary_size: vocabulary.len(),
        lexical_diversity: ratio(vocabulary.len() as f64, meaningful.len() as f64),
        avg_text_length: ratio(raw_chars as f64, units),
    }
}
