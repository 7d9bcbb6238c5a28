//! Filesystem locations the service operates on

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Filesystem configuration
///
/// The original deployment hardcoded these paths inside the request
/// handlers; here they are explicit business configuration. The intake
/// PDF is the default subject of classification and relabeling when a
/// request does not name one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory of labeled training PDFs (`<CODE>_<name>.pdf`)
    pub training_dir: PathBuf,
    /// File the trained model artifact is persisted to
    pub model_path: PathBuf,
    /// Default PDF to classify or relabel when none is given
    pub intake_pdf: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            training_dir: PathBuf::from("data/treino"),
            model_path: PathBuf::from("data/modelo-naive-bayes.bin"),
            intake_pdf: PathBuf::from("data/entrada.pdf"),
        }
    }
}
