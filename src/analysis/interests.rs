//! Interest detection from keyword frequency

use crate::analysis::lexicon::INTEREST_LEXICON;
use crate::analysis::result::InterestProfile;
use crate::analysis::scorer::score_frequency;
use crate::models::Corpus;

/// Scores above this count towards interest diversity
pub const DIVERSITY_THRESHOLD: f64 = 0.1;

const GENERAL_INTEREST: &str = "general";

pub fn detect_interests(corpus: &Corpus, top_n: usize) -> InterestProfile {
    let interest_scores = score_frequency(corpus, &INTEREST_LEXICON);
    let top_interests = interest_scores.top_n(top_n);

    let primary_interest = match top_interests.first() {
        Some((name, score)) if *score > 0.0 => name.clone(),
        _ => GENERAL_INTEREST.to_string(),
    };

    let interest_diversity = interest_scores
        .values()
        .filter(|score| **score > DIVERSITY_THRESHOLD)
        .count();

    InterestProfile {
        interest_scores,
        top_interests,
        primary_interest,
        interest_diversity,
    }
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
    fn test_primary_interest() {
        let profile = detect_interests(
            &corpus(&["I spend my weekends gaming on steam and my xbox"]),
            5,
        );
        assert_eq!(profile.primary_interest, "gaming");
        assert_eq!(profile.top_interests[0].0, "gaming");
        assert_eq!(profile.interest_diversity, 1);
    }

    #[test]
    fn test_general_when_nothing_matches() {
        let profile = detect_interests(&corpus(&["nothing of note happens here"]), 5);
        assert_eq!(profile.primary_interest, "general");
        assert_eq!(profile.interest_diversity, 0);
        // ties keep lexicon order
        assert_eq!(profile.top_interests[0].0, "technology");
        assert_eq!(profile.top_interests.len(), 5);
    }

    #[test]
    fn test_diversity_counts_several_categories() {
        let profile = detect_interests(
            &corpus(&["Programming a game about football and politics"]),
            3,
        );
        assert_eq!(profile.interest_diversity, 4);
        assert_eq!(profile.top_interests.len(), 3);
    }
}
