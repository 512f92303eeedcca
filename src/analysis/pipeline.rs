//! Analysis orchestration: corpus -> facets -> confidence

use std::sync::Arc;

use tracing::debug;
use tracing::error;
use tracing::info;
use tracing::warn;

use crate::analysis::activity;
use crate::analysis::clusters;
use crate::analysis::community;
use crate::analysis::confidence::calculate_confidence;
use crate::analysis::corpus::CorpusBuilder;
use crate::analysis::interests;
use crate::analysis::mbti;
use crate::analysis::personality;
use crate::analysis::result::AnalysisResult;
use crate::analysis::result::Facet;
use crate::analysis::result::FacetKind;
use crate::analysis::sentiment;
use crate::analysis::sentiment::PolarityScorer;
use crate::analysis::sentiment::ValenceLexiconScorer;
use crate::analysis::statistics;
use crate::analysis::topics;
use crate::analysis::writing_style;
use crate::config::AnalysisConfig;
use crate::errors::Result;
use crate::models::RawUserData;

/// Runs every facet over one subject's activity
///
/// Facets run concurrently on the blocking pool. A facet that fails or panics
/// is logged and left empty; the rest of the result is unaffected.
#[derive(Clone)]
pub struct PersonaAnalyzer {
    config: AnalysisConfig,
    scorer: Arc<dyn PolarityScorer>,
}

impl PersonaAnalyzer {
    /// Analyzer with the built-in valence lexicon scorer
    #[must_use]
    pub fn new(config: AnalysisConfig) -> Self {
        Self::with_scorer(config, Arc::new(ValenceLexiconScorer::new()))
    }

    #[must_use]
    pub fn with_scorer(config: AnalysisConfig, scorer: Arc<dyn PolarityScorer>) -> Self {
        Self { config, scorer }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze one subject
    ///
    /// Never fails: an empty corpus yields [`AnalysisResult::empty`], and
    /// facet failures degrade that facet to empty.
    pub async fn analyze(&self, data: &RawUserData) -> AnalysisResult {
        let subject = data.username.as_deref().unwrap_or("<anonymous>");
        let corpus =
            Arc::new(CorpusBuilder::from_config(&self.config).build(&data.posts, &data.comments));

        if corpus.is_empty() {
            warn!(
                "No qualifying text for {} ({} activities), returning empty analysis",
                subject,
                data.activity_count()
            );
            return AnalysisResult::empty();
        }

        info!(
            "Analyzing {}: {} text units from {} activities",
            subject,
            corpus.len(),
            data.activity_count()
        );

        let data = Arc::new(data.clone());
        let config = &self.config;

        let stats_job = {
            let corpus = Arc::clone(&corpus);
            move || Ok(Facet::Ready(statistics::extract_stats(&corpus)))
        };
        let sentiment_job = {
            let corpus = Arc::clone(&corpus);
            let scorer = Arc::clone(&self.scorer);
            let window = config.recent_window;
            move || sentiment::analyze_sentiment(&corpus, scorer.as_ref(), window)
        };
        let personality_job = {
            let corpus = Arc::clone(&corpus);
            let top_n = config.top_n;
            move || Ok(Facet::Ready(personality::detect_traits(&corpus, top_n)))
        };
        let interests_job = {
            let corpus = Arc::clone(&corpus);
            let top_n = config.top_n;
            move || Ok(Facet::Ready(interests::detect_interests(&corpus, top_n)))
        };
        let style_job = {
            let corpus = Arc::clone(&corpus);
            move || Ok(writing_style::analyze_style(&corpus))
        };
        let activity_job = {
            let data = Arc::clone(&data);
            move || Ok(activity::analyze_activity(&data))
        };
        let community_job = {
            let data = Arc::clone(&data);
            let top_n = config.top_n;
            move || Ok(community::analyze_community(&data, top_n))
        };
        let topics_job = {
            let corpus = Arc::clone(&corpus);
            let (max_topics, min_units) = (config.max_topics, config.topic_min_units);
            move || Ok(topics::extract_topics(&corpus, max_topics, min_units))
        };
        let clusters_job = {
            let data = Arc::clone(&data);
            let max_clusters = config.max_clusters;
            move || Ok(clusters::cluster_activities(&data, max_clusters))
        };
        let mbti_job = {
            let corpus = Arc::clone(&corpus);
            move || Ok(Facet::Ready(mbti::estimate_type(&corpus)))
        };

        let (
            text_statistics,
            sentiment_analysis,
            personality_traits,
            interests,
            writing_style,
            activity_patterns,
            community_engagement,
            topic_modeling,
            behavioral_clusters,
            mbti_estimation,
        ) = tokio::join!(
            run_facet(FacetKind::TextStatistics, stats_job),
            run_facet(FacetKind::SentimentAnalysis, sentiment_job),
            run_facet(FacetKind::PersonalityTraits, personality_job),
            run_facet(FacetKind::Interests, interests_job),
            run_facet(FacetKind::WritingStyle, style_job),
            run_facet(FacetKind::ActivityPatterns, activity_job),
            run_facet(FacetKind::CommunityEngagement, community_job),
            run_facet(FacetKind::TopicModeling, topics_job),
            run_facet(FacetKind::BehavioralClusters, clusters_job),
            run_facet(FacetKind::MbtiEstimation, mbti_job),
        );

        let mut result = AnalysisResult {
            text_statistics,
            sentiment_analysis,
            personality_traits,
            interests,
            writing_style,
            activity_patterns,
            community_engagement,
            topic_modeling,
            behavioral_clusters,
            mbti_estimation,
            confidence_scores: Default::default(),
        };
        result.confidence_scores = calculate_confidence(&result);

        let ready = FacetKind::all()
            .iter()
            .filter(|kind| result.is_facet_ready(**kind))
            .count();
        info!(
            "Analysis of {} complete: {}/{} facets populated",
            subject,
            ready,
            FacetKind::all().len()
        );

        result
    }
}

impl Default for PersonaAnalyzer {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

impl std::fmt::Debug for PersonaAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersonaAnalyzer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Run one facet on the blocking pool, degrading errors and panics to empty
async fn run_facet<T, F>(kind: FacetKind, job: F) -> Facet<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<Facet<T>> + Send + 'static,
{
    match tokio::task::spawn_blocking(job).await {
        Ok(Ok(facet)) => {
            debug!("Facet {} finished (populated: {})", kind, facet.is_ready());
            facet
        }
        Ok(Err(e)) => {
            error!("Facet {} failed: {}", kind, e);
            Facet::Empty
        }
        Err(e) => {
            error!("Facet {} task aborted: {}", kind, e);
            Facet::Empty
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PersonaError;

    #[tokio::test]
    async fn test_run_facet_passes_through_ready() {
        let facet = run_facet(FacetKind::Interests, || Ok(Facet::Ready(7))).await;
        assert_eq!(facet, Facet::Ready(7));
    }

    #[tokio::test]
    async fn test_run_facet_error_becomes_empty() {
        let facet: Facet<u32> = run_facet(FacetKind::SentimentAnalysis, || {
            Err(PersonaError::ScorerError("boom".to_string()))
        })
        .await;
        assert!(facet.is_empty());
    }

    #[tokio::test]
    async fn test_run_facet_panic_becomes_empty() {
        let facet: Facet<u32> =
            run_facet(FacetKind::TopicModeling, || panic!("facet exploded")).await;
        assert!(facet.is_empty());
    }

    #[tokio::test]
    async fn test_empty_input_returns_canonical_empty() {
        let result = PersonaAnalyzer::default().analyze(&RawUserData::default()).await;
        assert_eq!(result, AnalysisResult::empty());
    }
}
