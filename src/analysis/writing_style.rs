//! Writing style: sentence length, word length, punctuation and tone

use crate::analysis::result::Facet;
use crate::analysis::result::PunctuationUsage;
use crate::analysis::result::StyleComplexity;
use crate::analysis::result::StyleTone;
use crate::analysis::result::WritingStyle;
use crate::analysis::statistics::ratio;
use crate::analysis::tokenizer;
use crate::models::Corpus;

const COMPLEX_SENTENCE_TOKENS: f64 = 20.0;
const MODERATE_SENTENCE_TOKENS: f64 = 15.0;
/// Share of sentences that must carry a mark for the tone to follow it
const TONE_SHARE: f64 = 0.1;

pub fn complexity_for(avg_sentence_length: f64) -> StyleComplexity {
    if avg_sentence_length > COMPLEX_SENTENCE_TOKENS {
        StyleComplexity::Complex
    } else if avg_sentence_length > MODERATE_SENTENCE_TOKENS {
        StyleComplexity::Moderate
    } else {
        StyleComplexity::Simple
    }
}

pub fn tone_for(punctuation: &PunctuationUsage, sentence_count: usize) -> StyleTone {
    let threshold = sentence_count as f64 * TONE_SHARE;
    if punctuation.exclamations as f64 > threshold {
        StyleTone::Enthusiastic
    } else if punctuation.questions as f64 > threshold {
        StyleTone::Inquisitive
    } else {
        StyleTone::Neutral
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn analyze_style(corpus: &Corpus) -> Facet<WritingStyle> {
    let text = corpus.joined_text();
    let sentences = tokenizer::sentences(text);
    if sentences.is_empty() {
        return Facet::Empty;
    }

    // numbers and punctuation count toward sentence length
    let sentence_tokens: usize = sentences.iter().map(|s| tokenizer::tokens(s).len()).sum();
    let avg_sentence_length = ratio(sentence_tokens as f64, sentences.len() as f64);

    let word_lengths: Vec<usize> = tokenizer::words(text)
        .iter()
        .filter(|w| w.chars().all(char::is_alphabetic))
        .map(|w| w.chars().count())
        .collect();
    let avg_word_length = ratio(
        word_lengths.iter().sum::<usize>() as f64,
        word_lengths.len() as f64,
    );

    let punctuation_usage = PunctuationUsage {
        total: text.chars().filter(|c| matches!(c, '.' | '!' | '?')).count(),
        exclamations: text.matches('!').count(),
        questions: text.matches('?').count(),
    };

    let complexity = complexity_for(avg_sentence_length);
    let tone = tone_for(&punctuation_usage, sentences.len());

    Facet::Ready(WritingStyle {
        avg_sentence_length,
        avg_word_length,
        complexity,
        tone,
        punctuation_usage,
        summary: format!("{} sentences with {} tone", capitalize(&complexity.to_string()), tone),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::corpus::CorpusBuilder;
    use crate::models::RawItem;

    fn corpus(bodies: &[&str]) -> Corpus {
        let comments: Vec<RawItem> = bodies
            .iter()
            .map(|b| RawItem {
                body: Some((*b).to_string()),
                ..Default::default()
            })
            .collect();
        CorpusBuilder::default().build(&[], &comments)
    }

    #[test]
    fn test_simple_enthusiastic() {
        let style = analyze_style(&corpus(&["This is so cool! I love it!"]));
        let style = style.get().unwrap();
        assert_eq!(style.complexity, StyleComplexity::Simple);
        assert_eq!(style.tone, StyleTone::Enthusiastic);
        assert_eq!(style.punctuation_usage.exclamations, 2);
        assert_eq!(style.punctuation_usage.total, 2);
        assert_eq!(style.summary, "Simple sentences with enthusiastic tone");
    }

    #[test]
    fn test_inquisitive() {
        let style = analyze_style(&corpus(&["Why does this happen? Any idea how to fix it?"]));
        assert_eq!(style.get().unwrap().tone, StyleTone::Inquisitive);
    }

    #[test]
    fn test_complex_sentences() {
        let long = "word ".repeat(25);
        let style = analyze_style(&corpus(&[&format!("{}.", long.trim())]));
        let style = style.get().unwrap();
        assert_eq!(style.complexity, StyleComplexity::Complex);
        assert_eq!(style.tone, StyleTone::Neutral);
        // 25 words plus the closing period
        assert!((style.avg_sentence_length - 26.0).abs() < 1e-12);
        assert!((style.avg_word_length - 4.0).abs() < 1e-12);
        assert_eq!(style.summary, "Complex sentences with neutral tone");
    }

    #[test]
    fn test_sentence_length_counts_numbers_and_commas() {
        let style = analyze_style(&corpus(&[
            "I have 3 cats, 2 dogs, 4 fish, 1 bird, 7 mice, 8 frogs and 9 rats.",
        ]));
        let style = style.get().unwrap();
        assert!((style.avg_sentence_length - 23.0).abs() < 1e-12);
        assert_eq!(style.complexity, StyleComplexity::Complex);
        // only alphabetic words feed the word length
        assert!((style.avg_word_length - 3.7).abs() < 1e-12);
    }

    #[test]
    fn test_thresholds() {
        assert_eq!(complexity_for(20.0), StyleComplexity::Moderate);
        assert_eq!(complexity_for(15.0), StyleComplexity::Simple);
        assert_eq!(complexity_for(15.5), StyleComplexity::Moderate);
    }

    #[test]
    fn test_empty_corpus() {
        assert!(analyze_style(&Corpus::default()).is_empty());
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("moderate"), "Moderate");
        assert_eq!(capitalize(""), "");
    }
}
