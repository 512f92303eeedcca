//! Per-facet confidence derivation
//!
//! Only populated facets get a row, so an empty result carries an empty
//! mapping. Behavioral clusters never get one. Every value is clamped to [0, 1].

use crate::analysis::interests::DIVERSITY_THRESHOLD;
use crate::analysis::personality::trait_confidence;
use crate::analysis::result::ActivityPatterns;
use crate::analysis::result::AnalysisResult;
use crate::analysis::result::FacetKind;
use crate::analysis::result::ScoreMap;
use crate::analysis::result::TextStatistics;

const WRITING_STYLE_CONFIDENCE: f64 = 0.8;
const COMMUNITY_CONFIDENCE: f64 = 0.9;
const INTEREST_DIVERSITY_SCALE: f64 = 5.0;
const TOPIC_COUNT_SCALE: f64 = 3.0;
const TEXT_STATISTICS_SCALE: f64 = 10.0;
const ACTIVITY_SCALE: f64 = 5.0;

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

pub fn calculate_confidence(result: &AnalysisResult) -> ScoreMap {
    let mut scores = ScoreMap::new();

    if result.text_statistics.is_ready() {
        scores.insert(
            FacetKind::TextStatistics.as_str(),
            TextStatistics::FIELD_COUNT as f64 / TEXT_STATISTICS_SCALE,
        );
    }

    if let Some(sentiment) = result.sentiment_analysis.get() {
        scores.insert(FacetKind::SentimentAnalysis.as_str(), sentiment.confidence);
    }

    if let Some(personality) = result.personality_traits.get() {
        scores.insert(
            FacetKind::PersonalityTraits.as_str(),
            trait_confidence(&personality.trait_scores),
        );
    }

    if let Some(interests) = result.interests.get() {
        let diverse = interests
            .interest_scores
            .values()
            .filter(|score| **score > DIVERSITY_THRESHOLD)
            .count();
        scores.insert(
            FacetKind::Interests.as_str(),
            diverse as f64 / INTEREST_DIVERSITY_SCALE,
        );
    }

    if result.writing_style.is_ready() {
        scores.insert(FacetKind::WritingStyle.as_str(), WRITING_STYLE_CONFIDENCE);
    }

    if result.activity_patterns.is_ready() {
        scores.insert(
            FacetKind::ActivityPatterns.as_str(),
            ActivityPatterns::FIELD_COUNT as f64 / ACTIVITY_SCALE,
        );
    }

    if result.community_engagement.is_ready() {
        scores.insert(FacetKind::CommunityEngagement.as_str(), COMMUNITY_CONFIDENCE);
    }

    if let Some(topics) = result.topic_modeling.get() {
        scores.insert(
            FacetKind::TopicModeling.as_str(),
            topics.n_topics as f64 / TOPIC_COUNT_SCALE,
        );
    }

    if let Some(mbti) = result.mbti_estimation.get() {
        scores.insert(FacetKind::MbtiEstimation.as_str(), mbti.confidence);
    }

    scores
        .iter()
        .map(|(name, value)| (name.to_string(), clamp_unit(*value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::result::Facet;
    use crate::analysis::result::MbtiEstimation;
    use crate::analysis::result::TopicModel;

    fn stats() -> TextStatistics {
        TextStatistics {
            total_texts: 1,
            total_words: 3,
            meaningful_words: 2,
            total_sentences: 1,
            avg_words_per_text: 3.0,
            avg_sentences_per_text: 1.0,
            avg_words_per_sentence: 3.0,
            vocabulary_size: 2,
            lexical_diversity: 1.0,
            avg_text_length: 12.0,
        }
    }

    #[test]
    fn test_empty_result_has_no_rows() {
        assert!(calculate_confidence(&AnalysisResult::empty()).is_empty());
    }

    #[test]
    fn test_fixed_and_count_rules() {
        let result = AnalysisResult {
            text_statistics: Facet::Ready(stats()),
            topic_modeling: Facet::Ready(TopicModel {
                n_topics: 2,
                topics: Vec::new(),
                topic_coherence: 0.0,
            }),
            ..Default::default()
        };
        let scores = calculate_confidence(&result);
        assert_eq!(scores.get("text_statistics"), Some(&1.0));
        assert!((scores.get("topic_modeling").copied().unwrap() - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(scores.len(), 2);
        assert!(!scores.contains_key("behavioral_clusters"));
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let result = AnalysisResult {
            mbti_estimation: Facet::Ready(MbtiEstimation {
                mbti_type: "INFP".to_string(),
                description: String::new(),
                scores: ScoreMap::new(),
                confidence: 7.5,
            }),
            ..Default::default()
        };
        assert_eq!(calculate_confidence(&result).get("mbti_estimation"), Some(&1.0));
    }

    #[test]
    fn test_clamp_unit() {
        assert_eq!(clamp_unit(f64::NAN), 0.0);
        assert_eq!(clamp_unit(-0.3), 0.0);
        assert_eq!(clamp_unit(1.2), 1.0);
        assert_eq!(clamp_unit(0.4), 0.4);
    }
}
