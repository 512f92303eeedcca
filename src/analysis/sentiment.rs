//! Sentiment aggregation over per-unit polarity scores

use std::collections::HashMap;

use lazy_static::lazy_static;
use tracing::debug;

use crate::analysis::result::Facet;
use crate::analysis::result::SentimentAnalysis;
use crate::analysis::result::SentimentCategory;
use crate::analysis::result::SentimentDistribution;
use crate::analysis::result::SentimentTrend;
use crate::analysis::result::TrendDirection;
use crate::analysis::statistics::ratio;
use crate::analysis::tokenizer;
use crate::errors::PersonaError;
use crate::errors::Result;
use crate::models::Corpus;

/// Polarity above this is positive, below its negation negative
pub const POLARITY_THRESHOLD: f64 = 0.1;

/// Minimum mean difference between recent and older units to call a trend
pub const TREND_THRESHOLD: f64 = 0.1;

// Word valence lexicon (-5 to +5), compiled in
const VALENCE_LEXICON: &str = include_str!("../../data/valence.tsv");

const MAX_VALENCE: f64 = 5.0;
const SUBJECTIVITY_SCALE: f64 = 3.0;

lazy_static! {
    static ref VALENCE_SCORES: HashMap<String, i8> = {
        let mut map = HashMap::new();
        for line in VALENCE_LEXICON.lines() {
            if let Some((word, score_str)) = line.split_once('\t') {
                if let Ok(score) = score_str.trim().parse::<i8>() {
                    map.insert(word.to_lowercase(), score);
                }
            }
        }
        map
    };
}

// "t" covers "n't" contractions split by the tokenizer
const NEGATORS: &[&str] = &[
    "not", "no", "never", "nor", "t", "cannot", "dont", "doesnt", "didnt", "isnt", "wasnt",
    "arent", "werent", "cant", "couldnt", "wont", "wouldnt", "shouldnt", "aint",
];

/// Polarity in [-1, 1] and subjectivity in [0, 1] for one text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarityScore {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl PolarityScore {
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity,
            subjectivity,
        }
    }

    pub fn neutral() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Per-text sentiment scorer
pub trait PolarityScorer: Send + Sync {
    fn score(&self, text: &str) -> Result<PolarityScore>;
}

/// Lexicon-based scorer over the compiled-in valence table
#[derive(Debug, Clone, Copy, Default)]
pub struct ValenceLexiconScorer;

impl ValenceLexiconScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn lexicon_size() -> usize {
        VALENCE_SCORES.len()
    }
}

impl PolarityScorer for ValenceLexiconScorer {
    fn score(&self, text: &str) -> Result<PolarityScore> {
        let tokens = tokenizer::words(text);
        if tokens.is_empty() {
            return Ok(PolarityScore::neutral());
        }

        let mut total = 0.0;
        let mut matched = 0usize;
        for (i, token) in tokens.iter().enumerate() {
            let Some(&valence) = VALENCE_SCORES.get(token) else {
                continue;
            };
            let negated = i > 0 && NEGATORS.contains(&tokens[i - 1].as_str());
            let valence = f64::from(valence);
            total += if negated { -valence } else { valence };
            matched += 1;
        }

        if matched == 0 {
            return Ok(PolarityScore::neutral());
        }

        let polarity = (total / matched as f64 / MAX_VALENCE).clamp(-1.0, 1.0);
        let subjectivity =
            (matched as f64 / tokens.len() as f64 * SUBJECTIVITY_SCALE).min(1.0);

        Ok(PolarityScore::new(polarity, subjectivity))
    }
}

pub fn categorize(polarity: f64) -> SentimentCategory {
    if polarity > POLARITY_THRESHOLD {
        SentimentCategory::Positive
    } else if polarity < -POLARITY_THRESHOLD {
        SentimentCategory::Negative
    } else {
        SentimentCategory::Neutral
    }
}

fn mean(values: &[f64]) -> f64 {
    ratio(values.iter().sum(), values.len() as f64)
}

/// Recent-versus-older comparison over polarities in corpus order
///
/// The last `recent_window` values are "recent"; everything before is "older"
/// (empty, mean 0, when there are no more than `recent_window` values).
pub fn sentiment_trend(polarities: &[f64], recent_window: usize) -> Facet<SentimentTrend> {
    if polarities.len() < 2 {
        return Facet::Empty;
    }

    let split = polarities.len().saturating_sub(recent_window);
    let (older, recent) = polarities.split_at(split);
    let recent_sentiment = mean(recent);
    let older_sentiment = mean(older);

    let trend = if recent_sentiment > older_sentiment + TREND_THRESHOLD {
        TrendDirection::Improving
    } else if recent_sentiment < older_sentiment - TREND_THRESHOLD {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    };

    Facet::Ready(SentimentTrend {
        trend,
        recent_sentiment,
        older_sentiment,
        change: recent_sentiment - older_sentiment,
    })
}

/// Score every unit and aggregate
///
/// Fails when the scorer fails or returns a non-finite value; the caller
/// degrades the facet to empty in that case.
pub fn analyze_sentiment(
    corpus: &Corpus,
    scorer: &dyn PolarityScorer,
    recent_window: usize,
) -> Result<Facet<SentimentAnalysis>> {
    if corpus.is_empty() {
        return Ok(Facet::Empty);
    }

    let mut polarities = Vec::with_capacity(corpus.len());
    let mut subjectivities = Vec::with_capacity(corpus.len());

    for unit in corpus.units() {
        let score = scorer.score(unit.cleaned())?;
        if !score.polarity.is_finite() || !score.subjectivity.is_finite() {
            return Err(PersonaError::ScorerError(format!(
                "non-finite score ({}, {}) for text unit",
                score.polarity, score.subjectivity
            )));
        }
        polarities.push(score.polarity.clamp(-1.0, 1.0));
        subjectivities.push(score.subjectivity.clamp(0.0, 1.0));
    }

    let overall_sentiment = mean(&polarities);

    let mut distribution = SentimentDistribution::default();
    for polarity in &polarities {
        match categorize(*polarity) {
            SentimentCategory::Positive => distribution.positive += 1,
            SentimentCategory::Neutral => distribution.neutral += 1,
            SentimentCategory::Negative => distribution.negative += 1,
        }
    }

    debug!(
        "Scored {} units, mean polarity {:.3}",
        polarities.len(),
        overall_sentiment
    );

    Ok(Facet::Ready(SentimentAnalysis {
        overall_sentiment,
        sentiment_category: categorize(overall_sentiment),
        subjectivity: mean(&subjectivities),
        sentiment_distribution: distribution,
        sentiment_trends: sentiment_trend(&polarities, recent_window),
        confidence: (overall_sentiment.abs() * 2.0).min(1.0),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::corpus::CorpusBuilder;
    use crate::models::RawItem;

    /// Looks up a fixed polarity by the text's leading marker word
    struct MarkerScorer;

    impl PolarityScorer for MarkerScorer {
        fn score(&self, text: &str) -> Result<PolarityScore> {
            let polarity = if text.starts_with("upbeat") {
                0.5
            } else if text.starts_with("gloomy") {
                -0.5
            } else {
                0.0
            };
            Ok(PolarityScore::new(polarity, 0.5))
        }
    }

    struct FailingScorer;

    impl PolarityScorer for FailingScorer {
        fn score(&self, _text: &str) -> Result<PolarityScore> {
            Err(PersonaError::ScorerError("backend unavailable".to_string()))
        }
    }

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
    fn test_valence_lexicon_loaded() {
        assert!(ValenceLexiconScorer::lexicon_size() > 150);
    }

    #[test]
    fn test_valence_scorer_polarity() {
        let scorer = ValenceLexiconScorer::new();
        let positive = scorer.score("this is a great and wonderful day").unwrap();
        assert!(positive.polarity > 0.5);
        assert!(positive.subjectivity > 0.0 && positive.subjectivity <= 1.0);

        let negative = scorer.score("what a terrible awful mess").unwrap();
        assert!(negative.polarity < -0.3);
    }

    #[test]
    fn test_valence_scorer_negation() {
        let scorer = ValenceLexiconScorer::new();
        let score = scorer.score("this is not good").unwrap();
        assert!(score.polarity < 0.0);
        let score = scorer.score("I don't like it").unwrap();
        assert!(score.polarity < 0.0);
    }

    #[test]
    fn test_valence_scorer_no_matches_is_neutral() {
        let scorer = ValenceLexiconScorer::new();
        assert_eq!(scorer.score("the table has four legs").unwrap(), PolarityScore::neutral());
        assert_eq!(scorer.score("").unwrap(), PolarityScore::neutral());
    }

    #[test]
    fn test_categorize_buckets() {
        assert_eq!(categorize(0.5), SentimentCategory::Positive);
        assert_eq!(categorize(0.0), SentimentCategory::Neutral);
        assert_eq!(categorize(-0.5), SentimentCategory::Negative);
        assert_eq!(categorize(0.1), SentimentCategory::Neutral);
        assert_eq!(categorize(-0.1), SentimentCategory::Neutral);
    }

    #[test]
    fn test_distribution_sums_to_unit_count() {
        let c = corpus(&[
            "upbeat morning today",
            "plain old afternoon",
            "gloomy evening again",
        ]);
        let analysis = analyze_sentiment(&c, &MarkerScorer, 10).unwrap();
        let analysis = analysis.get().unwrap();
        assert_eq!(
            analysis.sentiment_distribution,
            SentimentDistribution {
                positive: 1,
                neutral: 1,
                negative: 1
            }
        );
        assert_eq!(analysis.sentiment_distribution.total(), c.len());
        assert_eq!(analysis.sentiment_category, SentimentCategory::Neutral);
        assert_eq!(analysis.confidence, 0.0);
    }

    #[test]
    fn test_confidence_is_magnitude() {
        let c = corpus(&["upbeat morning today", "upbeat evening too"]);
        let analysis = analyze_sentiment(&c, &MarkerScorer, 10).unwrap();
        let analysis = analysis.get().unwrap();
        assert_eq!(analysis.sentiment_category, SentimentCategory::Positive);
        assert_eq!(analysis.confidence, 1.0);
    }

    #[test]
    fn test_trend_needs_two_units() {
        assert!(sentiment_trend(&[0.4], 10).is_empty());
        assert!(sentiment_trend(&[], 10).is_empty());
    }

    #[test]
    fn test_trend_older_empty_within_window() {
        let trend = sentiment_trend(&[0.5, 0.5, 0.5], 10);
        let trend = trend.get().unwrap();
        assert_eq!(trend.older_sentiment, 0.0);
        assert_eq!(trend.recent_sentiment, 0.5);
        assert_eq!(trend.trend, TrendDirection::Improving);
    }

    #[test]
    fn test_trend_improving_when_recent_units_are_happier() {
        let mut polarities = vec![-0.5; 5];
        polarities.extend(vec![0.5; 10]);
        let trend = sentiment_trend(&polarities, 10);
        let trend = trend.get().unwrap();
        assert_eq!(trend.trend, TrendDirection::Improving);
        assert!((trend.change - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_trend_declining_when_recent_units_are_sadder() {
        let mut polarities = vec![0.5; 10];
        polarities.extend(vec![-0.5; 5]);
        // last ten: five at +0.5 then five at -0.5 -> mean 0; older five at +0.5
        let trend = sentiment_trend(&polarities, 10);
        assert_eq!(trend.get().unwrap().trend, TrendDirection::Declining);
    }

    #[test]
    fn test_trend_stable() {
        let trend = sentiment_trend(&[0.2, 0.2, 0.25], 2);
        assert_eq!(trend.get().unwrap().trend, TrendDirection::Stable);
    }

    #[test]
    fn test_scorer_failure_propagates() {
        let c = corpus(&["upbeat morning today"]);
        let err = analyze_sentiment(&c, &FailingScorer, 10).unwrap_err();
        assert!(matches!(err, PersonaError::ScorerError(_)));
    }

    #[test]
    fn test_empty_corpus() {
        let analysis = analyze_sentiment(&Corpus::default(), &MarkerScorer, 10).unwrap();
        assert!(analysis.is_empty());
    }
}
