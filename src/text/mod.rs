//! Portuguese text normalization
//!
//! Reduces raw extracted text to the space-joined stem string the
//! classifier is trained on: unicode word tokenization, lowercasing,
//! stopword removal, Snowball Portuguese stemming.

mod stopwords;

pub use stopwords::STOPWORDS;

use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Portuguese text normalizer.
///
/// The stopword set and stemmer are built once and held immutable;
/// `normalize` is a pure function of its input.
pub struct Normalizer {
    stopwords: HashSet<&'static str>,
    stemmer: Stemmer,
}

impl Normalizer {
    pub fn new() -> Self {
        Self {
            stopwords: STOPWORDS.iter().copied().collect(),
            stemmer: Stemmer::create(Algorithm::Portuguese),
        }
    }

    /// Normalize raw text into a single space-separated string of stems.
    ///
    /// Tokens are unicode words (punctuation is dropped by tokenization),
    /// lowercased, filtered against the stopword set and stemmed. Text
    /// consisting only of stopwords and punctuation normalizes to an
    /// empty string.
    pub fn normalize(&self, text: &str) -> String {
        let mut stems: Vec<String> = Vec::new();
        for word in text.unicode_words() {
            let lower = word.to_lowercase();
            if self.stopwords.contains(lower.as_str()) {
                continue;
            }
            stems.push(self.stemmer.stem(&lower).into_owned());
        }
        stems.join(" ")
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
