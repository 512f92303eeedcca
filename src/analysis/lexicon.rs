//! Static keyword lexicons
//!
//! Category tables for personality traits, interests and MBTI poles, plus the
//! English stop-word list. All tables are compiled in and never mutated;
//! [`validate_lexicons`] checks their structural invariants once at startup.

use std::collections::HashSet;

use lazy_static::lazy_static;

use crate::errors::PersonaError;
use crate::errors::Result;

/// A named, ordered mapping from category to trigger keywords
#[derive(Debug)]
pub struct CategoryLexicon {
    name: &'static str,
    categories: &'static [(&'static str, &'static [&'static str])],
}

impl CategoryLexicon {
    pub const fn new(
        name: &'static str,
        categories: &'static [(&'static str, &'static [&'static str])],
    ) -> Self {
        Self { name, categories }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Categories in table order
    pub fn categories(&self) -> impl Iterator<Item = (&'static str, &'static [&'static str])> {
        self.categories.iter().copied()
    }

    pub fn keywords(&self, category: &str) -> Option<&'static [&'static str]> {
        self.categories
            .iter()
            .find(|(name, _)| *name == category)
            .map(|(_, keywords)| *keywords)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

pub static PERSONALITY_LEXICON: CategoryLexicon = CategoryLexicon::new(
    "personality",
    &[
        ("introvert", &["alone", "quiet", "private", "reserved", "shy", "solitary"]),
        ("extrovert", &["social", "outgoing", "energetic", "talkative", "friendly", "party"]),
        ("analytical", &["analysis", "data", "research", "study", "evidence", "logical"]),
        ("creative", &["creative", "art", "design", "imagination", "original", "unique"]),
        ("sarcastic", &["sarcasm", "irony", "sarcastic", "joking", "humor", "wit"]),
        ("formal", &["formal", "professional", "proper", "respectful", "courteous"]),
        ("casual", &["casual", "relaxed", "informal", "chill", "laid-back", "easy-going"]),
        ("confident", &["confident", "sure", "certain", "definitely", "absolutely"]),
        ("uncertain", &["maybe", "perhaps", "might", "could", "possibly", "uncertain"]),
        ("positive", &["good", "great", "awesome", "amazing", "wonderful", "excellent"]),
        ("negative", &["bad", "terrible", "awful", "horrible", "disappointing", "frustrating"]),
    ],
);

// Multi-word keywords such as "machine learning" never equal a single token;
// they are kept so the table reads the same as the category definitions.
pub static INTEREST_LEXICON: CategoryLexicon = CategoryLexicon::new(
    "interests",
    &[
        ("technology", &["programming", "coding", "software", "tech", "computer", "ai", "machine learning"]),
        ("gaming", &["game", "gaming", "playstation", "xbox", "nintendo", "steam", "gamer"]),
        ("sports", &["football", "basketball", "soccer", "baseball", "tennis", "sport", "athlete"]),
        ("politics", &["politics", "political", "government", "election", "policy", "democracy"]),
        ("science", &["science", "scientific", "research", "study", "experiment", "discovery"]),
        ("entertainment", &["movie", "film", "music", "tv", "show", "entertainment", "celebrity"]),
        ("finance", &["money", "finance", "investment", "stock", "trading", "economy"]),
        ("health", &["health", "medical", "fitness", "exercise", "diet", "wellness"]),
        ("education", &["education", "learning", "school", "university", "study", "academic"]),
        ("travel", &["travel", "trip", "vacation", "destination", "tourism", "adventure"]),
    ],
);

/// MBTI pole indicators, listed as (first pole, second pole) pairs per axis
pub static MBTI_LEXICON: CategoryLexicon = CategoryLexicon::new(
    "mbti",
    &[
        ("E", &["social", "people", "group", "party", "friends", "outgoing"]),
        ("I", &["alone", "quiet", "private", "solitary", "introvert", "personal"]),
        ("S", &["practical", "detail", "fact", "concrete", "specific", "realistic"]),
        ("N", &["creative", "imagination", "abstract", "theory", "possibility", "vision"]),
        ("T", &["logic", "analysis", "reason", "objective", "factual", "systematic"]),
        ("F", &["feel", "emotion", "value", "relationship", "harmony", "compassion"]),
        ("J", &["plan", "organize", "structure", "decide", "control", "schedule"]),
        ("P", &["flexible", "spontaneous", "open", "explore", "adapt", "curious"]),
    ],
);

/// Social stances, matched as substrings of the lowercased raw text
pub static SOCIAL_VIEW_LEXICON: CategoryLexicon = CategoryLexicon::new(
    "social_views",
    &[
        ("privacy_advocate", &["privacy", "data", "surveillance", "tracking"]),
        ("tech_skeptic", &["big tech", "corporation", "monopoly", "surveillance"]),
        ("open_source", &["open source", "free software", "linux", "github"]),
        ("environmental", &["climate", "environment", "sustainability", "green"]),
        ("social_justice", &["equality", "justice", "rights", "discrimination"]),
    ],
);

/// The four MBTI axes; on a tie the second pole wins
pub const MBTI_AXES: [(&str, &str); 4] = [("E", "I"), ("S", "N"), ("T", "F"), ("J", "P")];

/// Personality categories the trait facet reads directly
pub const REQUIRED_PERSONALITY_CATEGORIES: [&str; 4] =
    ["introvert", "extrovert", "analytical", "creative"];

const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

lazy_static! {
    static ref STOP_WORD_SET: HashSet<&'static str> = STOP_WORDS.iter().copied().collect();
}

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

/// All lexicons known to the pipeline, in display order
pub fn all_lexicons() -> [&'static CategoryLexicon; 4] {
    [
        &PERSONALITY_LEXICON,
        &INTEREST_LEXICON,
        &MBTI_LEXICON,
        &SOCIAL_VIEW_LEXICON,
    ]
}

/// Check the static tables once at startup
///
/// A violation here is a programming error, so callers should treat it as fatal.
pub fn validate_lexicons() -> Result<()> {
    for lexicon in all_lexicons() {
        validate_lexicon(lexicon)?;
    }

    for category in REQUIRED_PERSONALITY_CATEGORIES {
        if PERSONALITY_LEXICON.keywords(category).is_none() {
            return Err(PersonaError::LexiconError(format!(
                "personality lexicon is missing required category '{category}'"
            )));
        }
    }

    for (first, second) in MBTI_AXES {
        for pole in [first, second] {
            if MBTI_LEXICON.keywords(pole).is_none() {
                return Err(PersonaError::LexiconError(format!(
                    "mbti lexicon is missing pole '{pole}'"
                )));
            }
        }
    }

    Ok(())
}

fn validate_lexicon(lexicon: &CategoryLexicon) -> Result<()> {
    if lexicon.is_empty() {
        return Err(PersonaError::LexiconError(format!(
            "{} lexicon has no categories",
            lexicon.name()
        )));
    }

    let mut seen = HashSet::new();
    for (category, keywords) in lexicon.categories() {
        if !seen.insert(category) {
            return Err(PersonaError::LexiconError(format!(
                "{} lexicon repeats category '{category}'",
                lexicon.name()
            )));
        }
        if keywords.is_empty() {
            return Err(PersonaError::LexiconError(format!(
                "{} lexicon category '{category}' has no keywords",
                lexicon.name()
            )));
        }
        for keyword in keywords {
            if keyword.is_empty() || *keyword != keyword.trim() || *keyword != keyword.to_lowercase()
            {
                return Err(PersonaError::LexiconError(format!(
                    "{} lexicon keyword '{keyword}' must be lowercase and trimmed",
                    lexicon.name()
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lexicons_are_valid() {
        validate_lexicons().unwrap();
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(PERSONALITY_LEXICON.len(), 11);
        assert_eq!(INTEREST_LEXICON.len(), 10);
        assert_eq!(MBTI_LEXICON.len(), 8);
        assert_eq!(SOCIAL_VIEW_LEXICON.len(), 5);
    }

    #[test]
    fn test_category_order_is_table_order() {
        let names: Vec<_> = PERSONALITY_LEXICON.categories().map(|(n, _)| n).take(3).collect();
        assert_eq!(names, vec!["introvert", "extrovert", "analytical"]);
    }

    #[test]
    fn test_keywords_lookup() {
        assert!(PERSONALITY_LEXICON.keywords("introvert").unwrap().contains(&"quiet"));
        assert!(PERSONALITY_LEXICON.keywords("nonexistent").is_none());
    }

    #[test]
    fn test_stop_words() {
        assert!(is_stop_word("the"));
        assert!(is_stop_word("wouldn"));
        assert!(!is_stop_word("rust"));
    }

    #[test]
    fn test_rejects_uppercase_keyword() {
        static BAD: CategoryLexicon = CategoryLexicon::new("bad", &[("x", &["Upper"])]);
        let err = validate_lexicon(&BAD).unwrap_err();
        assert!(matches!(err, PersonaError::LexiconError(_)));
    }

    #[test]
    fn test_rejects_duplicate_and_empty_categories() {
        static DUP: CategoryLexicon = CategoryLexicon::new("dup", &[("x", &["a"]), ("x", &["b"])]);
        static EMPTY: CategoryLexicon = CategoryLexicon::new("empty", &[("x", &[])]);
        static NONE: CategoryLexicon = CategoryLexicon::new("none", &[]);
        assert!(validate_lexicon(&DUP).is_err());
        assert!(validate_lexicon(&EMPTY).is_err());
        assert!(validate_lexicon(&NONE).is_err());
    }
}
