//! Classification pipeline configuration

use serde::{Deserialize, Serialize};

/// Classification pipeline parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Vocabulary cap: keep only the N most frequent terms of the fit corpus
    #[serde(default = "default_max_vocabulary")]
    pub max_vocabulary: usize,
    /// Laplace smoothing applied to class-conditional term frequencies
    #[serde(default = "default_smoothing")]
    pub smoothing: f64,
    /// Fraction of the corpus held out for evaluation
    #[serde(default = "default_test_fraction")]
    pub test_fraction: f64,
    /// Seed for the train/test partition, fixed for reproducible splits
    #[serde(default = "default_split_seed")]
    pub split_seed: u64,
}

fn default_max_vocabulary() -> usize {
    10_000
}

fn default_smoothing() -> f64 {
    1.0
}

fn default_test_fraction() -> f64 {
    0.2
}

fn default_split_seed() -> u64 {
    42
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_vocabulary: default_max_vocabulary(),
            smoothing: default_smoothing(),
            test_fraction: default_test_fraction(),
            split_seed: default_split_seed(),
        }
    }
}
