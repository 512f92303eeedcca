//! Lexicon keyword scoring
//!
//! Two normalizations are used. Presence scoring counts distinct keywords that
//! appear anywhere in the corpus vocabulary and scales by unit count (×10).
//! Frequency scoring counts every matching token and scales by word count (×100).
//! Both are clamped to [0, 1].

use std::collections::HashSet;

use crate::analysis::lexicon::CategoryLexicon;
use crate::analysis::result::ScoreMap;
use crate::analysis::statistics::ratio;
use crate::analysis::tokenizer;
use crate::models::Corpus;

const PRESENCE_SCALE: f64 = 10.0;
const FREQUENCY_SCALE: f64 = 100.0;

/// Distinct-keyword presence score per category, in lexicon order
pub fn score_presence(corpus: &Corpus, lexicon: &CategoryLexicon) -> ScoreMap {
    let tokens = tokenizer::words(corpus.joined_text());
    let vocabulary: HashSet<&str> = tokens.iter().map(String::as_str).collect();
    let units = corpus.len() as f64;

    lexicon
        .categories()
        .map(|(category, keywords)| {
            let hits = keywords.iter().filter(|k| vocabulary.contains(*k)).count();
            let score = (ratio(hits as f64, units) * PRESENCE_SCALE).min(1.0);
            (category, score)
        })
        .collect()
}

/// Keyword occurrence score per category over the full token stream
pub fn score_frequency(corpus: &Corpus, lexicon: &CategoryLexicon) -> ScoreMap {
    let tokens = tokenizer::words(corpus.joined_text());
    let total = tokens.len() as f64;

    lexicon
        .categories()
        .map(|(category, keywords)| {
            let keywords: HashSet<&str> = keywords.iter().copied().collect();
            let hits = tokens.iter().filter(|t| keywords.contains(t.as_str())).count();
            let score = (ratio(hits as f64, total) * FREQUENCY_SCALE).min(1.0);
            (category, score)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::corpus::CorpusBuilder;
    use crate::analysis::lexicon::INTEREST_LEXICON;
    use crate::analysis::lexicon::PERSONALITY_LEXICON;
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
    fn test_presence_counts_distinct_keywords_once() {
        let c = corpus(&[
            "quiet quiet quiet evenings",
            "nothing relevant in here at all",
            "another plain sentence here",
            "and yet another plain one",
            "fifth unit to dilute scores",
            "sixth unit to dilute scores",
            "seventh unit to dilute scores",
            "eighth unit to dilute scores",
            "ninth unit to dilute scores",
            "tenth unit to dilute scores",
            "eleventh unit to dilute scores",
            "twelfth unit to dilute scores",
            "thirteenth unit dilutes scores",
            "fourteenth unit dilutes scores",
            "fifteenth unit dilutes scores",
            "sixteenth unit dilutes scores",
            "seventeenth unit dilutes scores",
            "eighteenth unit dilutes scores",
            "nineteenth unit dilutes scores",
            "twentieth unit dilutes scores",
        ]);
        let scores = score_presence(&c, &PERSONALITY_LEXICON);
        // one distinct keyword over 20 units
        assert!((scores.get("introvert").copied().unwrap() - 0.5).abs() < 1e-12);
        assert_eq!(scores.get("extrovert"), Some(&0.0));
    }

    #[test]
    fn test_presence_preserves_lexicon_order() {
        let scores = score_presence(&corpus(&["some text goes here"]), &PERSONALITY_LEXICON);
        let keys: Vec<_> = scores.keys().collect();
        let expected: Vec<_> = PERSONALITY_LEXICON.categories().map(|(n, _)| n).collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_frequency_counts_repeats() {
        // 2 gaming hits over 200 tokens -> 0.01 * 100 = 1.0 clamp boundary
        let mut text = String::from("gaming gamer");
        for _ in 0..198 {
            text.push_str(" word");
        }
        let scores = score_frequency(&corpus(&[&text]), &INTEREST_LEXICON);
        assert!((scores.get("gaming").copied().unwrap() - 1.0).abs() < 1e-12);

        let mut text = String::from("gaming");
        for _ in 0..399 {
            text.push_str(" word");
        }
        let scores = score_frequency(&corpus(&[&text]), &INTEREST_LEXICON);
        assert!((scores.get("gaming").copied().unwrap() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_scores_clamped_for_massive_hits() {
        let text = "quiet alone private ".repeat(10_000);
        let c = corpus(&[&text]);
        for (_, score) in score_presence(&c, &PERSONALITY_LEXICON).iter() {
            assert!((0.0..=1.0).contains(score));
        }
        let text = "game movie money ".repeat(10_000);
        let c = corpus(&[&text]);
        for (_, score) in score_frequency(&c, &INTEREST_LEXICON).iter() {
            assert!((0.0..=1.0).contains(score));
        }
    }

    #[test]
    fn test_degenerate_corpus_scores_zero() {
        let empty = Corpus::default();
        assert!(score_presence(&empty, &PERSONALITY_LEXICON)
            .values()
            .all(|v| *v == 0.0));
        assert!(score_frequency(&empty, &INTEREST_LEXICON)
            .values()
            .all(|v| *v == 0.0));
    }
}
