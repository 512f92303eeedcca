//! Deterministic TF-IDF topic extraction
//!
//! Each unit is a document of its meaningful tokens. Terms that occur in at
//! least two documents form the vocabulary. Topics are seeded by the strongest
//! aggregate TF-IDF terms and filled with the terms that co-occur with the seed.

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::collections::HashSet;

use crate::analysis::result::Facet;
use crate::analysis::result::Topic;
use crate::analysis::result::TopicModel;
use crate::analysis::statistics::ratio;
use crate::analysis::tokenizer;
use crate::models::Corpus;

/// Minimum number of documents a term must appear in
const MIN_DOCUMENT_FREQUENCY: usize = 2;
const MAX_TOPIC_WORDS: usize = 10;

struct TfidfModel {
    documents: Vec<BTreeSet<String>>,
    /// Aggregate TF-IDF weight per vocabulary term
    weights: BTreeMap<String, f64>,
}

impl TfidfModel {
    fn fit(tokenized: &[Vec<String>]) -> Self {
        let documents: Vec<BTreeSet<String>> = tokenized
            .iter()
            .map(|doc| doc.iter().cloned().collect())
            .collect();

        let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();
        for doc in &documents {
            for term in doc {
                *document_frequency.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        let n_docs = documents.len() as f64;
        let idf: BTreeMap<&str, f64> = document_frequency
            .iter()
            .filter(|(_, df)| **df >= MIN_DOCUMENT_FREQUENCY)
            .map(|(term, df)| (*term, ((1.0 + n_docs) / (1.0 + *df as f64)).ln() + 1.0))
            .collect();

        let mut weights: BTreeMap<String, f64> = BTreeMap::new();
        for doc in tokenized {
            let mut counts: BTreeMap<&str, f64> = BTreeMap::new();
            for token in doc {
                if let Some(term_idf) = idf.get(token.as_str()) {
                    *counts.entry(token.as_str()).or_insert(0.0) += term_idf;
                }
            }

            // L2 normalization per document
            let norm = counts.values().map(|w| w * w).sum::<f64>().sqrt();
            if norm == 0.0 {
                continue;
            }
            for (term, weight) in counts {
                *weights.entry(term.to_string()).or_insert(0.0) += weight / norm;
            }
        }

        Self { documents, weights }
    }

    fn weight(&self, term: &str) -> f64 {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    /// Vocabulary ranked by aggregate weight, ties alphabetical
    fn ranked_terms(&self) -> Vec<&str> {
        let mut terms: Vec<&str> = self.weights.keys().map(String::as_str).collect();
        // keys come out of the BTreeMap sorted, and the sort is stable
        terms.sort_by(|a, b| self.weight(b).total_cmp(&self.weight(a)));
        terms
    }

    fn co_occurrence(&self, a: &str, b: &str) -> usize {
        self.documents
            .iter()
            .filter(|doc| doc.contains(a) && doc.contains(b))
            .count()
    }

    fn topic_words(&self, seed: &str) -> Vec<String> {
        let mut related: Vec<(&str, f64)> = self
            .weights
            .keys()
            .filter(|term| term.as_str() != seed)
            .filter_map(|term| {
                let co = self.co_occurrence(seed, term);
                (co > 0).then(|| (term.as_str(), co as f64 * self.weight(term)))
            })
            .collect();
        related.sort_by(|a, b| b.1.total_cmp(&a.1));

        std::iter::once(seed)
            .chain(related.into_iter().map(|(term, _)| term))
            .take(MAX_TOPIC_WORDS)
            .map(str::to_string)
            .collect()
    }

    /// Share of the seed's documents that also hold another topic word
    fn coherence(&self, words: &[String]) -> f64 {
        let Some((seed, rest)) = words.split_first() else {
            return 0.0;
        };
        let with_seed: Vec<&BTreeSet<String>> = self
            .documents
            .iter()
            .filter(|doc| doc.contains(seed))
            .collect();
        let coherent = with_seed
            .iter()
            .filter(|doc| rest.iter().any(|w| doc.contains(w)))
            .count();
        ratio(coherent as f64, with_seed.len() as f64)
    }
}

/// Extract up to `max_topics` topics; needs at least `min_units` units
pub fn extract_topics(corpus: &Corpus, max_topics: usize, min_units: usize) -> Facet<TopicModel> {
    if corpus.len() < min_units.max(1) {
        return Facet::Empty;
    }

    let tokenized: Vec<Vec<String>> = corpus.texts().map(tokenizer::meaningful_words).collect();
    let model = TfidfModel::fit(&tokenized);
    if model.weights.is_empty() {
        return Facet::Empty;
    }

    let n_topics = max_topics.min(corpus.len() / 2).min(model.weights.len());
    let mut used: HashSet<String> = HashSet::new();
    let mut topics = Vec::new();

    for seed in model.ranked_terms() {
        if topics.len() == n_topics {
            break;
        }
        if used.contains(seed) {
            continue;
        }
        let top_words = model.topic_words(seed);
        used.extend(top_words.iter().cloned());
        topics.push(Topic {
            topic_id: topics.len(),
            top_words,
            weight: model.weight(seed),
        });
    }

    if topics.is_empty() {
        return Facet::Empty;
    }

    let topic_coherence = ratio(
        topics.iter().map(|t| model.coherence(&t.top_words)).sum(),
        topics.len() as f64,
    );

    Facet::Ready(TopicModel {
        n_topics: topics.len(),
        topics,
        topic_coherence,
    })
}
