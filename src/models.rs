use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// One post or comment as delivered by the content source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawItem {
    #[serde(default)]
    pub id: Option<String>,
    /// Post title (comments have none)
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    /// Community the item was posted in
    #[serde(default, alias = "community")]
    pub subreddit: Option<String>,
    /// Net vote score, may be negative
    #[serde(default)]
    pub score: i64,
    /// Unix timestamp in seconds
    #[serde(default)]
    pub created_utc: Option<f64>,
    #[serde(default)]
    pub num_comments: Option<u64>,
    #[serde(default)]
    pub permalink: Option<String>,
    #[serde(default)]
    pub is_self: bool,
    #[serde(default)]
    pub over_18: bool,
    #[serde(default)]
    pub stickied: bool,
}

impl RawItem {
    /// Creation time as a UTC datetime, if present and representable
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        let ts = self.created_utc?;
        if !ts.is_finite() {
            return None;
        }
        DateTime::<Utc>::from_timestamp(ts.trunc() as i64, 0)
    }

    /// Body length in characters (0 when absent)
    pub fn body_len(&self) -> usize {
        self.body.as_deref().map_or(0, |b| b.chars().count())
    }
}

/// Everything scraped for one subject
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawUserData {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub posts: Vec<RawItem>,
    #[serde(default)]
    pub comments: Vec<RawItem>,
}

impl RawUserData {
    /// Posts followed by comments, each in source order
    pub fn activities(&self) -> impl Iterator<Item = (SourceKind, &RawItem)> {
        self.posts
            .iter()
            .map(|p| (SourceKind::Post, p))
            .chain(self.comments.iter().map(|c| (SourceKind::Comment, c)))
    }

    pub fn activity_count(&self) -> usize {
        self.posts.len() + self.comments.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Post,
    Comment,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Post => write!(f, "post"),
            SourceKind::Comment => write!(f, "comment"),
        }
    }
}

/// One post/comment text after normalization
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextUnit {
    raw: String,
    cleaned: String,
    timestamp: Option<DateTime<Utc>>,
    source: SourceKind,
    community: Option<String>,
    score: i64,
    permalink: Option<String>,
}

impl TextUnit {
    pub(crate) fn new(raw: &str, cleaned: String, source: SourceKind, item: &RawItem) -> Self {
        Self {
            raw: raw.to_string(),
            cleaned,
            timestamp: item.created_at(),
            source,
            community: item.subreddit.clone(),
            score: item.score,
            permalink: item.permalink.clone(),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn cleaned(&self) -> &str {
        &self.cleaned
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    pub fn source(&self) -> SourceKind {
        self.source
    }

    pub fn community(&self) -> Option<&str> {
        self.community.as_deref()
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn permalink(&self) -> Option<&str> {
        self.permalink.as_deref()
    }
}

/// Ordered, immutable set of text units for one subject
///
/// Order is scrape order (posts before comments), not necessarily chronological.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    units: Vec<TextUnit>,
    joined: String,
}

impl Corpus {
    pub(crate) fn from_units(units: Vec<TextUnit>) -> Self {
        let joined = units
            .iter()
            .map(TextUnit::cleaned)
            .collect::<Vec<_>>()
            .join(" ");
        Self { units, joined }
    }

    pub fn units(&self) -> &[TextUnit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// All cleaned texts joined with single spaces
    pub fn joined_text(&self) -> &str {
        &self.joined
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.units.iter().map(TextUnit::cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_item_deserializes_with_defaults() {
        let item: RawItem = serde_json::from_str(r#"{"body": "hello there"}"#).unwrap();
        assert_eq!(item.body.as_deref(), Some("hello there"));
        assert_eq!(item.score, 0);
        assert!(item.title.is_none());
        assert!(!item.is_self);
    }

    #[test]
    fn test_community_alias() {
        let item: RawItem = serde_json::from_str(r#"{"community": "rust"}"#).unwrap();
        assert_eq!(item.subreddit.as_deref(), Some("rust"));
    }

    #[test]
    fn test_created_at_conversion() {
        let item = RawItem {
            created_utc: Some(1_700_000_000.75),
            ..Default::default()
        };
        assert_eq!(item.created_at().unwrap().timestamp(), 1_700_000_000);

        let bad = RawItem {
            created_utc: Some(f64::NAN),
            ..Default::default()
        };
        assert!(bad.created_at().is_none());
    }

    #[test]
    fn test_activities_order_posts_then_comments() {
        let data = RawUserData {
            username: None,
            posts: vec![RawItem {
                id: Some("p1".into()),
                ..Default::default()
            }],
            comments: vec![RawItem {
                id: Some("c1".into()),
                ..Default::default()
            }],
        };
        let order: Vec<_> = data
            .activities()
            .map(|(kind, item)| (kind, item.id.clone().unwrap()))
            .collect();
        assert_eq!(
            order,
            vec![
                (SourceKind::Post, "p1".to_string()),
                (SourceKind::Comment, "c1".to_string())
            ]
        );
    }

    #[test]
    fn test_corpus_joined_text() {
        let item = RawItem::default();
        let corpus = Corpus::from_units(vec![
            TextUnit::new("a raw", "first".into(), SourceKind::Post, &item),
            TextUnit::new("b raw", "second".into(), SourceKind::Comment, &item),
        ]);
        assert_eq!(corpus.joined_text(), "first second");
        assert_eq!(corpus.len(), 2);
        assert!(!corpus.is_empty());
    }
}
