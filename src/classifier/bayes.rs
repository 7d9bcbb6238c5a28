//! Multinomial Naive Bayes
//!
//! Laplace-smoothed class-conditional term frequency estimation over
//! bag-of-words counts; prediction picks the class maximizing the log
//! posterior under empirical class priors.

use super::vectorizer::TermCounts;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when `predict` is called before `fit`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("classifier has not been fitted")]
pub struct NotFitted;

/// Multinomial Naive Bayes classifier over sparse term counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultinomialNb {
    alpha: f64,
    /// Distinct class labels observed at fit time, ascending.
    classes: Vec<usize>,
    /// Log empirical prior per class, aligned with `classes`.
    class_log_prior: Vec<f64>,
    /// Log class-conditional term probability, `[class][term]`.
    feature_log_prob: Vec<Vec<f64>>,
}

impl MultinomialNb {
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha,
            classes: Vec::new(),
            class_log_prior: Vec::new(),
            feature_log_prob: Vec::new(),
        }
    }

    /// Fit from scratch, replacing any previously learned state.
    ///
    /// `documents` and `labels` must be aligned; `n_features` is the
    /// vocabulary size the term counts were produced against.
    pub fn fit(&mut self, documents: &[TermCounts], labels: &[usize], n_features: usize) {
        let mut classes: Vec<usize> = labels.to_vec();
        classes.sort_unstable();
        classes.dedup();

        let n_classes = classes.len();
        let mut docs_per_class = vec![0u64; n_classes];
        let mut term_totals = vec![vec![0u64; n_features]; n_classes];

        for (counts, label) in documents.iter().zip(labels) {
            // label is guaranteed present: classes was built from labels
            if let Ok(position) = classes.binary_search(label) {
                docs_per_class[position] += 1;
                for &(index, count) in counts {
                    term_totals[position][index] += u64::from(count);
                }
            }
        }

        let total_docs = documents.len() as f64;
        self.class_log_prior = docs_per_class
            .iter()
            .map(|&count| (count as f64 / total_docs).ln())
            .collect();
        self.feature_log_prob = term_totals
            .iter()
            .map(|totals| {
                let class_total: u64 = totals.iter().sum();
                let denominator = class_total as f64 + self.alpha * n_features as f64;
                totals
                    .iter()
                    .map(|&count| ((count as f64 + self.alpha) / denominator).ln())
                    .collect()
            })
            .collect();
        self.classes = classes;
    }

    /// Predict the class with the highest posterior probability.
    ///
    /// Ties resolve to the first class in ascending class-index order.
    pub fn predict(&self, document: &TermCounts) -> Result<usize, NotFitted> {
        if self.classes.is_empty() {
            return Err(NotFitted);
        }

        let mut best: Option<(usize, f64)> = None;
        for (position, &class) in self.classes.iter().enumerate() {
            let mut score = self.class_log_prior[position];
            for &(index, count) in document {
                if let Some(log_prob) = self.feature_log_prob[position].get(index) {
                    score += f64::from(count) * log_prob;
                }
            }
            // strictly-greater keeps the lowest class index on ties
            if best.map(|(_, s)| score > s).unwrap_or(true) {
                best = Some((class, score));
            }
        }

        best.map(|(class, _)| class).ok_or(NotFitted)
    }

    /// Classes observed at fit time, ascending.
    pub fn classes(&self) -> &[usize] {
        &self.classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Term counts over a 4-term vocabulary
    fn doc(counts: &[(usize, u32)]) -> TermCounts {
        counts.to_vec()
    }

    #[test]
    fn test_predict_before_fit_is_error() {
        let nb = MultinomialNb::new(1.0);
        assert_eq!(nb.predict(&doc(&[(0, 1)])), Err(NotFitted));
    }

    #[test]
    fn test_two_class_recovery() {
        let mut nb = MultinomialNb::new(1.0);
        let documents = vec![
            doc(&[(0, 3), (1, 1)]), // class 0 heavy on term 0
            doc(&[(0, 2), (1, 1)]),
            doc(&[(2, 3), (3, 1)]), // class 4 heavy on term 2
            doc(&[(2, 2), (3, 2)]),
        ];
        let labels = vec![0, 0, 4, 4];
        nb.fit(&documents, &labels, 4);

        assert_eq!(nb.classes(), &[0, 4]);
        assert_eq!(nb.predict(&doc(&[(0, 2)])), Ok(0));
        assert_eq!(nb.predict(&doc(&[(2, 1), (3, 1)])), Ok(4));
    }

    #[test]
    fn test_empty_document_falls_back_to_prior() {
        let mut nb = MultinomialNb::new(1.0);
        let documents = vec![
            doc(&[(0, 1)]),
            doc(&[(0, 1)]),
            doc(&[(0, 1)]),
            doc(&[(1, 1)]),
        ];
        nb.fit(&documents, &[2, 2, 2, 5], 2);

        // Class 2 has three quarters of the prior mass
        assert_eq!(nb.predict(&doc(&[])), Ok(2));
    }

    #[test]
    fn test_tie_breaks_to_lowest_class() {
        let mut nb = MultinomialNb::new(1.0);
        // Perfectly symmetric classes: every score ties
        let documents = vec![doc(&[(0, 1)]), doc(&[(1, 1)])];
        nb.fit(&documents, &[3, 6], 2);

        assert_eq!(nb.predict(&doc(&[])), Ok(3));
    }

    #[test]
    fn test_refit_replaces_state() {
        let mut nb = MultinomialNb::new(1.0);
        nb.fit(&[doc(&[(0, 1)])], &[1], 2);
        nb.fit(&[doc(&[(0, 1)])], &[6], 2);
        assert_eq!(nb.classes(), &[6]);
        assert_eq!(nb.predict(&doc(&[(0, 1)])), Ok(6));
    }
}
