//! Personality trait detection from lexicon presence

use crate::analysis::lexicon::PERSONALITY_LEXICON;
use crate::analysis::result::PersonalityTraits;
use crate::analysis::result::ScoreMap;
use crate::analysis::scorer::score_presence;
use crate::models::Corpus;

pub fn detect_traits(corpus: &Corpus, top_n: usize) -> PersonalityTraits {
    let trait_scores = score_presence(corpus, &PERSONALITY_LEXICON);

    PersonalityTraits {
        dominant_traits: trait_scores.top_n(top_n),
        personality_type: personality_type(&trait_scores),
        confidence: trait_confidence(&trait_scores),
        trait_scores,
    }
}

/// Coarse two-letter code padded with "XX"
fn personality_type(scores: &ScoreMap) -> String {
    let score = |name: &str| scores.get(name).copied().unwrap_or(0.0);

    let attitude = if score("introvert") > score("extrovert") { 'I' } else { 'E' };
    let function = if score("analytical") > score("creative") { 'T' } else { 'F' };

    format!("{attitude}{function}XX")
}

/// Spread between the strongest trait and the mean, doubled
pub(crate) fn trait_confidence(scores: &ScoreMap) -> f64 {
    match (scores.max_value(), scores.mean_value()) {
        (Some(max), Some(mean)) => ((max - mean) * 2.0).clamp(0.0, 1.0),
        _ => 0.0,
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
    fn test_introvert_detection() {
        let traits = detect_traits(
            &corpus(&[
                "I like quiet evenings alone",
                "Reading books at the library",
                "Cooking dinner for myself",
            ]),
            5,
        );
        assert!(traits.trait_scores.get("introvert").copied().unwrap() > 0.0);
        assert_eq!(traits.trait_scores.get("extrovert"), Some(&0.0));
        assert!(traits.personality_type.starts_with('I'));
        assert_eq!(traits.dominant_traits[0].0, "introvert");
    }

    #[test]
    fn test_personality_type_defaults_on_tie() {
        let traits = detect_traits(&corpus(&["nothing to see in this one"]), 5);
        assert_eq!(traits.personality_type, "EFXX");
    }

    #[test]
    fn test_analytical_thinker() {
        let traits = detect_traits(&corpus(&["The data and evidence support this analysis"]), 3);
        assert_eq!(traits.personality_type, "ETXX");
        assert_eq!(traits.dominant_traits.len(), 3);
    }

    #[test]
    fn test_confidence_bounds() {
        let flat: ScoreMap = [("a", 0.0), ("b", 0.0)].into_iter().collect();
        assert_eq!(trait_confidence(&flat), 0.0);

        let full: ScoreMap = [("a", 1.0), ("b", 1.0)].into_iter().collect();
        assert_eq!(trait_confidence(&full), 0.0);

        let spread: ScoreMap = [("a", 1.0), ("b", 0.0), ("c", 0.0), ("d", 0.0)]
            .into_iter()
            .collect();
        assert_eq!(trait_confidence(&spread), 1.0);

        assert_eq!(trait_confidence(&ScoreMap::new()), 0.0);
    }
}
