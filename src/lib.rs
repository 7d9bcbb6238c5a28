//! Triagem: Naive Bayes triage of legal petition PDFs
//!
//! Classifies petition documents into one of seven fixed specialization
//! categories, featuring:
//! - PDF text extraction via pdf-extract
//! - Portuguese normalization (tokenization, stopword removal, Snowball stemming)
//! - Bag-of-words vectorization with a capped vocabulary
//! - Laplace-smoothed multinomial Naive Bayes
//! - A persisted trained-model artifact, loaded read-only at classification time
//! - An HTTP API (train, classify, relabel) and a matching CLI

pub mod classifier;
pub mod config;
pub mod content;
pub mod corpus;
pub mod model;
pub mod server;
pub mod service;
pub mod text;
pub mod types;

pub use config::Config;
pub use types::*;
