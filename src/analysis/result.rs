//! Fixed-schema analysis result types
//!
//! Every facet is a [`Facet`]: either `Empty` (serialized as `{}`) or a fully
//! populated record. [`AnalysisResult`] always carries every facet key.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::Serialize;
use serde::Serializer;

/// One facet's output, or the explicit empty form
#[derive(Debug, Clone, PartialEq)]
pub enum Facet<T> {
    Empty,
    Ready(T),
}

impl<T> Facet<T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Facet::Empty)
    }

    pub fn is_ready(&self) -> bool {
        !self.is_empty()
    }

    pub fn get(&self) -> Option<&T> {
        match self {
            Facet::Ready(value) => Some(value),
            Facet::Empty => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Facet<U> {
        match self {
            Facet::Ready(value) => Facet::Ready(f(value)),
            Facet::Empty => Facet::Empty,
        }
    }
}

impl<T> Default for Facet<T> {
    fn default() -> Self {
        Facet::Empty
    }
}

impl<T> From<Option<T>> for Facet<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Facet::Empty, Facet::Ready)
    }
}

impl<T: Serialize> Serialize for Facet<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Facet::Ready(value) => value.serialize(serializer),
            Facet::Empty => serializer.serialize_map(Some(0))?.end(),
        }
    }
}

/// Insertion-ordered name → value mapping, serialized as a JSON object
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMap<V = f64> {
    entries: Vec<(String, V)>,
}

impl<V> ScoreMap<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or overwrite, keeping the original position for existing keys
    pub fn insert(&mut self, name: impl Into<String>, value: V) {
        let name = name.into();
        if let Some(slot) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    pub fn get(&self, name: &str) -> Option<&V> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ScoreMap<f64> {
    /// Highest-scoring entries, ties kept in insertion order
    pub fn top_n(&self, n: usize) -> Vec<(String, f64)> {
        let mut ranked: Vec<(String, f64)> = self.entries.clone();
        // sort_by is stable, so equal scores keep table order
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    pub fn max_value(&self) -> Option<f64> {
        self.values().copied().reduce(f64::max)
    }

    pub fn mean_value(&self) -> Option<f64> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.values().sum::<f64>() / self.entries.len() as f64)
        }
    }
}

impl<V> Default for ScoreMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for ScoreMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl<V: Serialize> Serialize for ScoreMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// The named facets of an analysis, in result order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FacetKind {
    TextStatistics,
    SentimentAnalysis,
    PersonalityTraits,
    Interests,
    WritingStyle,
    ActivityPatterns,
    CommunityEngagement,
    TopicModeling,
    BehavioralClusters,
    MbtiEstimation,
}

impl FacetKind {
    pub fn all() -> &'static [FacetKind] {
        &[
            FacetKind::TextStatistics,
            FacetKind::SentimentAnalysis,
            FacetKind::PersonalityTraits,
            FacetKind::Interests,
            FacetKind::WritingStyle,
            FacetKind::ActivityPatterns,
            FacetKind::CommunityEngagement,
            FacetKind::TopicModeling,
            FacetKind::BehavioralClusters,
            FacetKind::MbtiEstimation,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FacetKind::TextStatistics => "text_statistics",
            FacetKind::SentimentAnalysis => "sentiment_analysis",
            FacetKind::PersonalityTraits => "personality_traits",
            FacetKind::Interests => "interests",
            FacetKind::WritingStyle => "writing_style",
            FacetKind::ActivityPatterns => "activity_patterns",
            FacetKind::CommunityEngagement => "community_engagement",
            FacetKind::TopicModeling => "topic_modeling",
            FacetKind::BehavioralClusters => "behavioral_clusters",
            FacetKind::MbtiEstimation => "mbti_estimation",
        }
    }
}

impl std::fmt::Display for FacetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level keys of a serialized [`AnalysisResult`], in order
pub const RESULT_KEYS: [&str; 11] = [
    "text_statistics",
    "sentiment_analysis",
    "personality_traits",
    "interests",
    "writing_style",
    "activity_patterns",
    "community_engagement",
    "topic_modeling",
    "behavioral_clusters",
    "mbti_estimation",
    "confidence_scores",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStatistics {
    pub total_texts: usize,
    pub total_words: usize,
    pub meaningful_words: usize,
    pub total_sentences: usize,
    pub avg_words_per_text: f64,
    pub avg_sentences_per_text: f64,
    pub avg_words_per_sentence: f64,
    pub vocabulary_size: usize,
    pub lexical_diversity: f64,
    pub avg_text_length: f64,
}

impl TextStatistics {
    pub const FIELD_COUNT: usize = 10;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentCategory {
    Positive,
    Neutral,
    Negative,
}

impl std::fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentCategory::Positive => write!(f, "positive"),
            SentimentCategory::Neutral => write!(f, "neutral"),
            SentimentCategory::Negative => write!(f, "negative"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentDistribution {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentDistribution {
    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Improving,
    Declining,
    Stable,
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrendDirection::Improving => write!(f, "improving"),
            TrendDirection::Declining => write!(f, "declining"),
            TrendDirection::Stable => write!(f, "stable"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentTrend {
    pub trend: TrendDirection,
    pub recent_sentiment: f64,
    pub older_sentiment: f64,
    pub change: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentAnalysis {
    pub overall_sentiment: f64,
    pub sentiment_category: SentimentCategory,
    pub subjectivity: f64,
    pub sentiment_distribution: SentimentDistribution,
    pub sentiment_trends: Facet<SentimentTrend>,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonalityTraits {
    pub trait_scores: ScoreMap,
    pub dominant_traits: Vec<(String, f64)>,
    pub personality_type: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterestProfile {
    pub interest_scores: ScoreMap,
    pub top_interests: Vec<(String, f64)>,
    pub primary_interest: String,
    pub interest_diversity: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleComplexity {
    Complex,
    Moderate,
    Simple,
}

impl std::fmt::Display for StyleComplexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleComplexity::Complex => write!(f, "complex"),
            StyleComplexity::Moderate => write!(f, "moderate"),
            StyleComplexity::Simple => write!(f, "simple"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleTone {
    Enthusiastic,
    Inquisitive,
    Neutral,
}

impl std::fmt::Display for StyleTone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleTone::Enthusiastic => write!(f, "enthusiastic"),
            StyleTone::Inquisitive => write!(f, "inquisitive"),
            StyleTone::Neutral => write!(f, "neutral"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PunctuationUsage {
    pub total: usize,
    pub exclamations: usize,
    pub questions: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WritingStyle {
    pub avg_sentence_length: f64,
    pub avg_word_length: f64,
    pub complexity: StyleComplexity,
    pub tone: StyleTone,
    pub punctuation_usage: PunctuationUsage,
    pub summary: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityRhythm {
    NightOwl,
    EarlyBird,
    Balanced,
}

impl std::fmt::Display for ActivityRhythm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityRhythm::NightOwl => write!(f, "night_owl"),
            ActivityRhythm::EarlyBird => write!(f, "early_bird"),
            ActivityRhythm::Balanced => write!(f, "balanced"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityPatterns {
    pub total_activities: usize,
    pub activity_frequency: f64,
    pub peak_hour: u32,
    pub activity_pattern: ActivityRhythm,
    pub hour_distribution: BTreeMap<u32, usize>,
    pub night_activity_ratio: f64,
}

impl ActivityPatterns {
    pub const FIELD_COUNT: usize = 6;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EngagementLevel {
    High,
    Moderate,
    Low,
}

impl std::fmt::Display for EngagementLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngagementLevel::High => write!(f, "high"),
            EngagementLevel::Moderate => write!(f, "moderate"),
            EngagementLevel::Low => write!(f, "low"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommunityEngagement {
    pub community_diversity: usize,
    pub top_communities: Vec<(String, usize)>,
    pub avg_score: f64,
    pub total_score: i64,
    pub comment_ratio: f64,
    pub engagement_level: EngagementLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Topic {
    pub topic_id: usize,
    pub top_words: Vec<String>,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicModel {
    pub n_topics: usize,
    pub topics: Vec<Topic>,
    pub topic_coherence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterSummary {
    pub cluster_id: usize,
    pub size: usize,
    pub avg_score: f64,
    pub avg_length: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BehavioralClusters {
    pub n_clusters: usize,
    pub clusters: Vec<ClusterSummary>,
    pub cluster_labels: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MbtiEstimation {
    #[serde(rename = "type")]
    pub mbti_type: String,
    pub description: String,
    pub scores: ScoreMap<usize>,
    pub confidence: f64,
}

/// Aggregate of every facet for one subject
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub text_statistics: Facet<TextStatistics>,
    pub sentiment_analysis: Facet<SentimentAnalysis>,
    pub personality_traits: Facet<PersonalityTraits>,
    pub interests: Facet<InterestProfile>,
    pub writing_style: Facet<WritingStyle>,
    pub activity_patterns: Facet<ActivityPatterns>,
    pub community_engagement: Facet<CommunityEngagement>,
    pub topic_modeling: Facet<TopicModel>,
    pub behavioral_clusters: Facet<BehavioralClusters>,
    pub mbti_estimation: Facet<MbtiEstimation>,
    /// Facet name → confidence in [0, 1], one row per populated facet
    pub confidence_scores: ScoreMap,
}

impl AnalysisResult {
    /// The canonical empty result: every facet `{}`
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_facet_ready(&self, kind: FacetKind) -> bool {
        match kind {
            FacetKind::TextStatistics => self.text_statistics.is_ready(),
            FacetKind::SentimentAnalysis => self.sentiment_analysis.is_ready(),
            FacetKind::PersonalityTraits => self.personality_traits.is_ready(),
            FacetKind::Interests => self.interests.is_ready(),
            FacetKind::WritingStyle => self.writing_style.is_ready(),
            FacetKind::ActivityPatterns => self.activity_patterns.is_ready(),
            FacetKind::CommunityEngagement => self.community_engagement.is_ready(),
            FacetKind::TopicModeling => self.topic_modeling.is_ready(),
            FacetKind::BehavioralClusters => self.behavioral_clusters.is_ready(),
            FacetKind::MbtiEstimation => self.mbti_estimation.is_ready(),
        }
    }
}
