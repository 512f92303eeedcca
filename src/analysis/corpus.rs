//! Corpus construction from raw posts and comments

use tracing::debug;

use crate::analysis::normalizer;
use crate::config::AnalysisConfig;
use crate::models::Corpus;
use crate::models::RawItem;
use crate::models::SourceKind;
use crate::models::TextUnit;

/// Turns raw activity into a filtered, normalized [`Corpus`]
#[derive(Debug, Clone)]
pub struct CorpusBuilder {
    min_text_length: usize,
}

impl CorpusBuilder {
    pub fn new(min_text_length: usize) -> Self {
        Self { min_text_length }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(config.min_text_length)
    }

    /// Build the corpus: post titles and bodies, then comment bodies
    ///
    /// Each text field becomes its own unit when its trimmed length exceeds
    /// the minimum and it is non-empty after cleaning. Input order is kept.
    pub fn build(&self, posts: &[RawItem], comments: &[RawItem]) -> Corpus {
        let mut units = Vec::new();
        let mut skipped = 0usize;

        for post in posts {
            for field in [post.title.as_deref(), post.body.as_deref()] {
                match self.unit_for(field, SourceKind::Post, post) {
                    Some(unit) => units.push(unit),
                    None if field.is_some() => skipped += 1,
                    None => {}
                }
            }
        }

        for comment in comments {
            match self.unit_for(comment.body.as_deref(), SourceKind::Comment, comment) {
                Some(unit) => units.push(unit),
                None if comment.body.is_some() => skipped += 1,
                None => {}
            }
        }

        debug!(
            "Built corpus with {} units ({} text fields skipped)",
            units.len(),
            skipped
        );

        Corpus::from_units(units)
    }

    fn unit_for(&self, text: Option<&str>, source: SourceKind, item: &RawItem) -> Option<TextUnit> {
        let text = text?;
        if text.trim().chars().count() <= self.min_text_length {
            return None;
        }

        let cleaned = normalizer::clean(text);
        if cleaned.is_empty() {
            return None;
        }

        Some(TextUnit::new(text, cleaned, source, item))
    }
}

impl Default for CorpusBuilder {
    fn default() -> Self {
        Self::from_config(&AnalysisConfig::default())
    }
}
