//! Four-axis MBTI-style type estimation
//!
//! Each pole counts how many of its indicator words occur as substrings of the
//! joined lowercase corpus text. This is looser than token presence on purpose:
//! "personal" also counts inside "personality".

use crate::analysis::lexicon::MBTI_AXES;
use crate::analysis::lexicon::MBTI_LEXICON;
use crate::analysis::result::MbtiEstimation;
use crate::analysis::result::ScoreMap;
use crate::models::Corpus;

/// Average axis difference that maps to full confidence
const CONFIDENCE_SCALE: f64 = 5.0;

pub const UNKNOWN_TYPE: &str = "Unknown type";

const TYPE_DESCRIPTIONS: [(&str, &str); 16] = [
    ("INTJ", "The Architect - Imaginative and strategic thinkers"),
    ("INTP", "The Logician - Innovative inventors with an unquenchable thirst for knowledge"),
    ("ENTJ", "The Commander - Bold, imaginative and strong-willed leaders"),
    ("ENTP", "The Debater - Smart and curious thinkers who cannot resist an intellectual challenge"),
    ("INFJ", "The Advocate - Quiet and mystical, yet very inspiring and tireless idealists"),
    ("INFP", "The Mediator - Poetic, kind and altruistic people, always eager to help a good cause"),
    ("ENFJ", "The Protagonist - Charismatic and inspiring leaders, able to mesmerize their listeners"),
    ("ENFP", "The Campaigner - Enthusiastic, creative and sociable free spirits"),
    ("ISTJ", "The Logistician - Practical and fact-minded individuals, whose reliability cannot be doubted"),
    ("ISFJ", "The Defender - Very dedicated and warm protectors, always ready to defend their loved ones"),
    ("ESTJ", "The Executive - Excellent administrators, unsurpassed at managing things or people"),
    ("ESFJ", "The Consul - Extraordinarily caring, social and popular people"),
    ("ISTP", "The Virtuoso - Bold and practical experimenters, masters of all kinds of tools"),
    ("ISFP", "The Adventurer - Flexible and charming artists, always ready to explore and experience something new"),
    ("ESTP", "The Entrepreneur - Smart, energetic and very perceptive people"),
    ("ESFP", "The Entertainer - Spontaneous, energetic and enthusiastic entertainers"),
];

/// Descriptor for a four-letter code, or [`UNKNOWN_TYPE`]
pub fn describe_type(code: &str) -> &'static str {
    TYPE_DESCRIPTIONS
        .iter()
        .find(|(t, _)| *t == code)
        .map_or(UNKNOWN_TYPE, |(_, description)| *description)
}

/// Per-pole indicator counts in lexicon order
pub fn pole_counts(text: &str) -> ScoreMap<usize> {
    let text = text.to_lowercase();
    MBTI_LEXICON
        .categories()
        .map(|(pole, indicators)| {
            let count = indicators.iter().filter(|i| text.contains(*i)).count();
            (pole, count)
        })
        .collect()
}

/// Winning letters per axis; a tie goes to the second pole
pub fn resolve_type(scores: &ScoreMap<usize>) -> String {
    MBTI_AXES
        .iter()
        .map(|(first, second)| {
            let a = scores.get(first).copied().unwrap_or(0);
            let b = scores.get(second).copied().unwrap_or(0);
            if a > b {
                *first
            } else {
                *second
            }
        })
        .collect()
}

pub fn type_confidence(scores: &ScoreMap<usize>) -> f64 {
    let total_diff: usize = MBTI_AXES
        .iter()
        .map(|(first, second)| {
            let a = scores.get(first).copied().unwrap_or(0);
            let b = scores.get(second).copied().unwrap_or(0);
            a.abs_diff(b)
        })
        .sum();
    let avg_diff = total_diff as f64 / MBTI_AXES.len() as f64;
    (avg_diff / CONFIDENCE_SCALE).clamp(0.0, 1.0)
}

pub fn estimate_type(corpus: &Corpus) -> MbtiEstimation {
    let scores = pole_counts(corpus.joined_text());
    let mbti_type = resolve_type(&scores);

    MbtiEstimation {
        description: describe_type(&mbti_type).to_string(),
        confidence: type_confidence(&scores),
        mbti_type,
        scores,
    }
}
