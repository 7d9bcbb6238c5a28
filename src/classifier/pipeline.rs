//! Vectorizer + classifier pipeline
//!
//! The two-stage pipeline the service trains and serves: term-count
//! vectorization feeding multinomial Naive Bayes. Fitting replaces all
//! learned state; there is no incremental update.

use super::bayes::{MultinomialNb, NotFitted};
use super::vectorizer::CountVectorizer;
use serde::{Deserialize, Serialize};

/// The trained classification pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierPipeline {
    vectorizer: CountVectorizer,
    classifier: MultinomialNb,
}

impl ClassifierPipeline {
    pub fn new(max_vocabulary: usize, smoothing: f64) -> Self {
        Self {
            vectorizer: CountVectorizer::new(max_vocabulary),
            classifier: MultinomialNb::new(smoothing),
        }
    }

    /// Learn vocabulary and class-conditional term statistics from the
    /// given normalized documents and aligned class labels.
    pub fn fit(&mut self, documents: &[String], labels: &[usize]) {
        self.vectorizer.fit(documents);
        let counts: Vec<_> = documents
            .iter()
            .map(|document| self.vectorizer.transform(document))
            .collect();
        self.classifier
            .fit(&counts, labels, self.vectorizer.vocabulary_size());
    }

    /// Predict the class index for one normalized document.
    pub fn predict(&self, document: &str) -> Result<usize, NotFitted> {
        self.classifier.predict(&self.vectorizer.transform(document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_fit_then_predict_near_identical_text() {
        let mut pipeline = ClassifierPipeline::new(10_000, 1.0);
        pipeline.fit(
            &docs(&[
                "pagament salari atras",
                "salari atras verb rescisor",
                "pericia medic exam",
                "exam medic laudo pericia",
            ]),
            &[0, 0, 2, 2],
        );

        assert_eq!(pipeline.predict("atras pagament salari"), Ok(0));
        assert_eq!(pipeline.predict("laudo exam pericia"), Ok(2));
    }

    #[test]
    fn test_unfitted_pipeline_errors() {
        let pipeline = ClassifierPipeline::new(10_000, 1.0);
        assert!(pipeline.predict("qualquer cois").is_err());
    }

    #[test]
    fn test_empty_normalized_text_predicts_prior_class() {
        let mut pipeline = ClassifierPipeline::new(10_000, 1.0);
        pipeline.fit(
            &docs(&["pagament salari", "pagament atras", "pericia exam"]),
            &[0, 0, 2],
        );
        // Empty feature vector: the majority prior wins
        assert_eq!(pipeline.predict(""), Ok(0));
    }
}
