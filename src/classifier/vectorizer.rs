//! Bag-of-words term-count vectorization
//!
//! Learns a vocabulary from the fit corpus, capped at the N most
//! frequent terms; documents are mapped to sparse term counts over
//! vocabulary indices. Out-of-vocabulary terms silently count zero.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sparse term counts for one document: (vocabulary index, count),
/// sorted by index.
pub type TermCounts = Vec<(usize, u32)>;

/// Bag-of-words count vectorizer with a capped vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountVectorizer {
    max_features: usize,
    vocabulary: HashMap<String, usize>,
}

impl CountVectorizer {
    pub fn new(max_features: usize) -> Self {
        Self {
            max_features,
            vocabulary: HashMap::new(),
        }
    }

    /// Learn the vocabulary from the fit corpus, replacing any
    /// previously learned state.
    ///
    /// Keeps the `max_features` most frequent terms (ties broken
    /// lexicographically); indices are assigned in alphabetical order
    /// of the kept terms.
    pub fn fit(&mut self, documents: &[String]) {
        let mut frequencies: HashMap<&str, u64> = HashMap::new();
        for document in documents {
            for term in document.split_whitespace() {
                *frequencies.entry(term).or_default() += 1;
            }
        }

        let mut ranked: Vec<(&str, u64)> = frequencies.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(self.max_features);

        let mut kept: Vec<&str> = ranked.into_iter().map(|(term, _)| term).collect();
        kept.sort_unstable();

        self.vocabulary = kept
            .into_iter()
            .enumerate()
            .map(|(index, term)| (term.to_string(), index))
            .collect();
    }

    /// Map a document to sparse term counts over the learned vocabulary.
    pub fn transform(&self, document: &str) -> TermCounts {
        let mut counts: HashMap<usize, u32> = HashMap::new();
        for term in document.split_whitespace() {
            if let Some(&index) = self.vocabulary.get(term) {
                *counts.entry(index).or_default() += 1;
            }
        }
        let mut sparse: TermCounts = counts.into_iter().collect();
        sparse.sort_unstable_by_key(|&(index, _)| index);
        sparse
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}
