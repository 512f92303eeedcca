//! Template persona built directly from an analysis result
//!
//! No generation provider is involved: every field is read from the facets,
//! with neutral fallbacks when a facet is empty.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::analysis::lexicon::SOCIAL_VIEW_LEXICON;
use crate::analysis::mbti;
use crate::analysis::result::AnalysisResult;
use crate::analysis::result::StyleComplexity;
use crate::analysis::statistics::ratio;
use crate::models::RawItem;
use crate::models::RawUserData;
use crate::models::SourceKind;

const BIG_FIVE_BASELINE: i32 = 50;
const SENTIMENT_SWING: f64 = 0.3;
const CITED_TRAITS: usize = 3;
const QUOTE_CHARS: usize = 100;
pub const GENERAL_VIEW: &str = "General Reddit user";

/// Big Five estimates on a 0..=100 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BigFiveTraits {
    pub openness: u8,
    pub conscientiousness: u8,
    pub extraversion: u8,
    pub agreeableness: u8,
    pub neuroticism: u8,
}

impl BigFiveTraits {
    pub fn neutral() -> Self {
        Self::from_raw([BIG_FIVE_BASELINE; 5])
    }

    fn from_raw(values: [i32; 5]) -> Self {
        let clamp = |v: i32| v.clamp(0, 100) as u8;
        Self {
            openness: clamp(values[0]),
            conscientiousness: clamp(values[1]),
            extraversion: clamp(values[2]),
            agreeableness: clamp(values[3]),
            neuroticism: clamp(values[4]),
        }
    }

    /// Adjust the neutral baseline from overall sentiment and sentence complexity
    pub fn estimate(sentiment: Option<f64>, complexity: Option<StyleComplexity>) -> Self {
        let [mut openness, conscientiousness, extraversion, mut agreeableness, mut neuroticism] =
            [BIG_FIVE_BASELINE; 5];

        match sentiment {
            Some(s) if s > SENTIMENT_SWING => {
                agreeableness += 20;
                neuroticism -= 10;
            }
            Some(s) if s < -SENTIMENT_SWING => {
                neuroticism += 20;
                agreeableness -= 10;
            }
            _ => {}
        }

        match complexity {
            Some(StyleComplexity::Complex) => openness += 15,
            Some(StyleComplexity::Simple) => openness -= 10,
            _ => {}
        }

        Self::from_raw([
            openness,
            conscientiousness,
            extraversion,
            agreeableness,
            neuroticism,
        ])
    }
}

impl Default for BigFiveTraits {
    fn default() -> Self {
        Self::neutral()
    }
}

/// A source item quoted as evidence for one dominant trait
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Citation {
    #[serde(rename = "trait")]
    pub trait_name: String,
    pub evidence: String,
    pub source_id: Option<String>,
    pub source_type: SourceKind,
    pub community: Option<String>,
    pub score: i64,
    pub created_utc: Option<f64>,
    pub permalink: Option<String>,
    pub quote: String,
    pub full_text: String,
}

impl Citation {
    fn new(trait_name: &str, kind: SourceKind, item: &RawItem) -> Self {
        let full_text = item
            .title
            .as_deref()
            .filter(|t| !t.is_empty())
            .or(item.body.as_deref())
            .unwrap_or_default()
            .to_string();
        let quote = if full_text.chars().count() > QUOTE_CHARS {
            format!("{}...", full_text.chars().take(QUOTE_CHARS).collect::<String>())
        } else {
            full_text.clone()
        };

        Self {
            trait_name: trait_name.to_string(),
            evidence: format!("Shows {trait_name} characteristics"),
            source_id: item.id.clone(),
            source_type: kind,
            community: item.subreddit.clone(),
            score: item.score,
            created_utc: item.created_utc,
            permalink: item.permalink.clone(),
            quote,
            full_text,
        }
    }
}

/// Social stances whose keywords appear anywhere in the raw text
///
/// Falls back to [`GENERAL_VIEW`] when nothing matches.
pub fn social_views(data: &RawUserData) -> Vec<String> {
    let text = data
        .activities()
        .map(|(_, item)| {
            let title = item.title.as_deref().unwrap_or_default();
            let body = item.body.as_deref().unwrap_or_default();
            format!("{title} {body}").to_lowercase()
        })
        .collect::<Vec<_>>()
        .join(" ");

    let views: Vec<String> = SOCIAL_VIEW_LEXICON
        .categories()
        .filter(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(view, _)| title_case(view))
        .collect();

    if views.is_empty() {
        vec![GENERAL_VIEW.to_string()]
    } else {
        views
    }
}

fn title_case(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// One source item per trait, taken in activity order (posts, then comments)
pub fn citations(data: &RawUserData, traits: &[String]) -> Vec<Citation> {
    traits
        .iter()
        .take(CITED_TRAITS)
        .zip(data.activities())
        .map(|(name, (kind, item))| Citation::new(name, kind, item))
        .collect()
}

/// Overlap between two personas
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonaComparison {
    pub common_traits: Vec<String>,
    pub common_interests: Vec<String>,
    pub similarities: Vec<String>,
    pub differences: Vec<String>,
    /// Mean of the trait and interest Jaccard overlaps, in [0, 1]
    pub compatibility_score: f64,
}

fn name_set(items: &[String]) -> BTreeSet<&str> {
    items.iter().map(String::as_str).collect()
}

fn overlap<'a>(a: &BTreeSet<&'a str>, b: &BTreeSet<&'a str>) -> (Vec<&'a str>, f64) {
    let common: Vec<&str> = a.intersection(b).copied().collect();
    let union = a.union(b).count().max(1);
    let share = ratio(common.len() as f64, union as f64);
    (common, share)
}

/// Headline persona fields for one subject
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonaSummary {
    pub username: String,
    pub mbti_type: String,
    pub mbti_description: String,
    pub traits: Vec<String>,
    pub interests: Vec<String>,
    pub writing_style: String,
    pub sentiment: String,
    pub engagement_level: String,
    pub activity_pattern: String,
    pub social_views: Vec<String>,
    pub big_five: BigFiveTraits,
    pub description: String,
    pub citations: Vec<Citation>,
    pub overall_confidence: f64,
}

impl PersonaSummary {
    /// Persona from the analysis alone; see [`PersonaSummary::with_sources`]
    pub fn from_analysis(username: &str, analysis: &AnalysisResult) -> Self {
        let estimate = analysis.mbti_estimation.get();
        let sentiment = analysis.sentiment_analysis.get();
        let style = analysis.writing_style.get();

        let sentiment_label = sentiment.map_or_else(
            || "neutral".to_string(),
            |s| s.sentiment_category.to_string(),
        );
        let complexity_label =
            style.map_or_else(|| "moderate".to_string(), |s| s.complexity.to_string());

        let traits: Vec<String> = analysis
            .personality_traits
            .get()
            .map(|p| {
                p.dominant_traits
                    .iter()
                    .filter(|(_, score)| *score > 0.0)
                    .map(|(name, _)| name.clone())
                    .collect()
            })
            .unwrap_or_default();

        let interests: Vec<String> = analysis
            .interests
            .get()
            .map(|i| {
                i.top_interests
                    .iter()
                    .filter(|(_, score)| *score > 0.0)
                    .map(|(name, _)| name.clone())
                    .collect()
            })
            .unwrap_or_default();

        let overall_confidence = analysis.confidence_scores.mean_value().unwrap_or(0.0);

        Self {
            username: username.to_string(),
            mbti_type: estimate.map_or_else(|| "Unknown".to_string(), |m| m.mbti_type.clone()),
            mbti_description: estimate.map_or_else(
                || mbti::UNKNOWN_TYPE.to_string(),
                |m| m.description.clone(),
            ),
            traits,
            interests,
            writing_style: style.map_or_else(|| "Unknown".to_string(), |s| s.summary.clone()),
            engagement_level: analysis
                .community_engagement
                .get()
                .map_or_else(|| "unknown".to_string(), |c| c.engagement_level.to_string()),
            activity_pattern: analysis
                .activity_patterns
                .get()
                .map_or_else(|| "unknown".to_string(), |a| a.activity_pattern.to_string()),
            social_views: vec![GENERAL_VIEW.to_string()],
            big_five: BigFiveTraits::estimate(
                sentiment.map(|s| s.overall_sentiment),
                style.map(|s| s.complexity),
            ),
            description: format!(
                "User shows {sentiment_label} sentiment with {complexity_label} writing style."
            ),
            sentiment: sentiment_label,
            citations: Vec::new(),
            overall_confidence,
        }
    }

    /// Attach social views and trait citations read from the raw activity
    #[must_use]
    pub fn with_sources(mut self, data: &RawUserData) -> Self {
        self.social_views = social_views(data);
        self.citations = citations(data, &self.traits);
        self
    }

    /// Shared traits and interests, and how compatible the two personas are
    pub fn compare(&self, other: &Self) -> PersonaComparison {
        let (traits_a, traits_b) = (name_set(&self.traits), name_set(&other.traits));
        let (interests_a, interests_b) = (name_set(&self.interests), name_set(&other.interests));

        let (common_traits, trait_share) = overlap(&traits_a, &traits_b);
        let (common_interests, interest_share) = overlap(&interests_a, &interests_b);

        let mut similarities: Vec<String> =
            common_traits.iter().map(|t| format!("Both show {t}")).collect();
        similarities.extend(common_interests.iter().map(|i| format!("Both interested in {i}")));

        let mut differences: Vec<String> = traits_a
            .difference(&traits_b)
            .map(|t| format!("{} shows {t}", self.username))
            .collect();
        differences.extend(
            traits_b
                .difference(&traits_a)
                .map(|t| format!("{} shows {t}", other.username)),
        );

        PersonaComparison {
            common_traits: common_traits.into_iter().map(String::from).collect(),
            common_interests: common_interests.into_iter().map(String::from).collect(),
            similarities,
            differences,
            compatibility_score: (trait_share + interest_share) / 2.0,
        }
    }
}
