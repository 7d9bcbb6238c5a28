//! Classification pipeline
//!
//! Bag-of-words vectorization, multinomial Naive Bayes, the seeded
//! train/test partition and the held-out evaluation report.

mod bayes;
mod pipeline;
mod report;
mod split;
mod vectorizer;

pub use bayes::{MultinomialNb, NotFitted};
pub use pipeline::ClassifierPipeline;
pub use report::{accuracy, classification_report};
pub use split::train_test_split;
pub use vectorizer::{CountVectorizer, TermCounts};
