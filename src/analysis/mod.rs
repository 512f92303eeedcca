//! Heuristic text-analysis pipeline
//!
//! Raw activity is normalized into a [`Corpus`](crate::models::Corpus), scored
//! facet by facet, and assembled into an [`AnalysisResult`] with per-facet
//! confidence values.

pub mod activity;
pub mod clusters;
pub mod community;
pub mod confidence;
pub mod corpus;
pub mod interests;
pub mod lexicon;
pub mod mbti;
pub mod normalizer;
pub mod personality;
pub mod pipeline;
pub mod result;
pub mod scorer;
pub mod sentiment;
pub mod statistics;
pub mod tokenizer;
pub mod topics;
pub mod writing_style;

pub use confidence::calculate_confidence;
pub use corpus::CorpusBuilder;
pub use lexicon::validate_lexicons;
pub use lexicon::CategoryLexicon;
pub use pipeline::PersonaAnalyzer;
pub use result::AnalysisResult;
pub use result::Facet;
pub use result::FacetKind;
pub use result::ScoreMap;
pub use sentiment::PolarityScore;
pub use sentiment::PolarityScorer;
pub use sentiment::ValenceLexiconScorer;
pub use statistics::extract_stats;
